use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use triangles::api::{
    are_congruent, are_similar, info, info_greatest_area, info_greatest_perimeter,
    pairwise_not_similar_report, Triangle,
};

mod input;
use input::{parse_sides, read_triangles_csv};

#[derive(Parser)]
#[command(name = "triangles")]
#[command(about = "Triangle geometry over side lengths")]
struct Cmd {
    /// Emit a JSON envelope instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Describe one triangle: sorted sides, side ratios, area, perimeter
    Info(OneTriangle),
    /// Heron area, printed with four decimals
    Area(OneTriangle),
    /// Perimeter
    Perimeter(OneTriangle),
    /// Right-angle check
    RightAngled(OneTriangle),
    /// Equilateral check
    Equilateral(OneTriangle),
    /// Isosceles check (equilateral counts as isosceles)
    Isosceles(OneTriangle),
    /// Perimeter-based congruence of two triangles
    Congruent(TwoTriangles),
    /// Similarity of two triangles under cyclic side alignment
    Similar(TwoTriangles),
    /// Describe the batch triangle with the greatest perimeter
    GreatestPerimeter(BatchInput),
    /// Describe the batch triangle with the greatest area
    GreatestArea(BatchInput),
    /// Report index pairs (1-based) that are not similar
    NotSimilar(BatchInput),
}

#[derive(Args)]
struct OneTriangle {
    /// Side lengths as A,B,C
    #[arg(long, value_parser = parse_sides)]
    sides: Triangle,
}

#[derive(Args)]
struct TwoTriangles {
    /// First triangle's sides as A,B,C
    #[arg(long, value_parser = parse_sides)]
    first: Triangle,
    /// Second triangle's sides as A,B,C
    #[arg(long, value_parser = parse_sides)]
    second: Triangle,
}

#[derive(Args)]
struct BatchInput {
    /// Triangle sides as A,B,C; repeat for each triangle
    #[arg(long = "sides", value_parser = parse_sides)]
    sides: Vec<Triangle>,
    /// CSV file with side1,side2,side3 columns, appended after --sides
    #[arg(long)]
    input: Option<PathBuf>,
}

impl BatchInput {
    fn collect(&self) -> Result<Vec<Triangle>> {
        let mut ts = self.sides.clone();
        if let Some(path) = &self.input {
            ts.extend(read_triangles_csv(path)?);
        }
        Ok(ts)
    }
}

/// One executed operation, ready for either output mode.
struct Outcome {
    op: &'static str,
    text: String,
    result: Value,
}

impl Outcome {
    fn text(op: &'static str, text: String) -> Self {
        let result = json!(&text);
        Self { op, text, result }
    }
    fn number(op: &'static str, text: String, value: f64) -> Self {
        Self {
            op,
            text,
            result: json!(value),
        }
    }
    fn flag(op: &'static str, value: bool) -> Self {
        Self {
            op,
            text: value.to_string(),
            result: json!(value),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    op: &'a str,
    result: &'a Value,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let outcome = run(&cmd.action)?;
    if cmd.json {
        let envelope = Envelope {
            op: outcome.op,
            result: &outcome.result,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", outcome.text);
    }
    Ok(())
}

fn run(action: &Action) -> Result<Outcome> {
    match action {
        Action::Info(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "info");
            Ok(Outcome::text("info", info(&t)))
        }
        Action::Area(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "area");
            let res = t.area();
            Ok(Outcome::number("area", format!("{res:.4}"), res))
        }
        Action::Perimeter(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "perimeter");
            let res = t.perimeter();
            Ok(Outcome::number("perimeter", format!("{res}"), res))
        }
        Action::RightAngled(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "right_angled");
            Ok(Outcome::flag("right_angled", t.is_right_angled()))
        }
        Action::Equilateral(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "equilateral");
            Ok(Outcome::flag("equilateral", t.is_equilateral()))
        }
        Action::Isosceles(arg) => {
            let t = validated(arg.sides)?;
            tracing::info!(sides = ?t.sides_sorted(), "isosceles");
            Ok(Outcome::flag("isosceles", t.is_isosceles()))
        }
        Action::Congruent(arg) => {
            let (x, y) = (validated(arg.first)?, validated(arg.second)?);
            tracing::info!(first = ?x.sides_sorted(), second = ?y.sides_sorted(), "congruent");
            Ok(Outcome::flag("congruent", are_congruent(&x, &y)))
        }
        Action::Similar(arg) => {
            let (x, y) = (validated(arg.first)?, validated(arg.second)?);
            tracing::info!(first = ?x.sides_sorted(), second = ?y.sides_sorted(), "similar");
            Ok(Outcome::flag("similar", are_similar(&x, &y)))
        }
        Action::GreatestPerimeter(batch) => {
            let ts = validated_batch(batch)?;
            tracing::info!(count = ts.len(), "greatest_perimeter");
            Ok(Outcome::text(
                "greatest_perimeter",
                info_greatest_perimeter(&ts)?,
            ))
        }
        Action::GreatestArea(batch) => {
            let ts = validated_batch(batch)?;
            tracing::info!(count = ts.len(), "greatest_area");
            Ok(Outcome::text("greatest_area", info_greatest_area(&ts)?))
        }
        Action::NotSimilar(batch) => {
            let ts = validated_batch(batch)?;
            tracing::info!(count = ts.len(), "not_similar");
            Ok(Outcome::text("not_similar", pairwise_not_similar_report(&ts)))
        }
    }
}

/// Boundary validation: side positivity is checked here, once, before any
/// engine call; the engine itself never re-validates.
fn validated(t: Triangle) -> Result<Triangle> {
    if !t.is_valid() {
        bail!("triangle has incorrect side(s)");
    }
    Ok(t)
}

fn validated_batch(batch: &BatchInput) -> Result<Vec<Triangle>> {
    let ts = batch.collect()?;
    if ts.iter().any(|t| !t.is_valid()) {
        bail!("triangle has incorrect side(s)");
    }
    Ok(ts)
}
