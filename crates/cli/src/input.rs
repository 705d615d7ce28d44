//! Raw-input parsing for the CLI boundary: comma-separated side triples and
//! CSV batch files. No validation happens here beyond syntax; positivity is
//! checked by the command handlers before any engine call.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;
use triangles::Triangle;

/// Parse `"A,B,C"` into a triangle value.
pub fn parse_sides(raw: &str) -> Result<Triangle, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "expected three comma-separated sides, got {}",
            parts.len()
        ));
    }
    let mut sides = [0.0f64; 3];
    for (slot, part) in sides.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid side {part:?}: {e}"))?;
    }
    Ok(Triangle::new(sides[0], sides[1], sides[2]))
}

/// Read a batch of triangles from a CSV with `side1,side2,side3` columns.
///
/// The scan is lazy and the side columns are cast to f64 up front, so integer
/// CSV columns load the same as float ones.
pub fn read_triangles_csv(path: &Path) -> Result<Vec<Triangle>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([
            col("side1").cast(DataType::Float64),
            col("side2").cast(DataType::Float64),
            col("side3").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading triangles from {}", path.display()))?;

    let side1 = df.column("side1")?.f64()?;
    let side2 = df.column("side2")?.f64()?;
    let side3 = df.column("side3")?.f64()?;

    let mut out = Vec::with_capacity(df.height());
    for k in 0..df.height() {
        match (side1.get(k), side2.get(k), side3.get(k)) {
            (Some(a), Some(b), Some(c)) => out.push(Triangle::new(a, b, c)),
            _ => bail!("row {} of {} has missing side values", k + 1, path.display()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sides_accepts_triples() {
        let t = parse_sides("3,4,5").unwrap();
        assert_eq!(t.sides_sorted(), [3.0, 4.0, 5.0]);
        let t = parse_sides(" 1.5 , 2.5, 3 ").unwrap();
        assert_eq!(t.sides_sorted(), [1.5, 2.5, 3.0]);
    }

    #[test]
    fn parse_sides_rejects_bad_input() {
        assert!(parse_sides("3,4").is_err());
        assert!(parse_sides("3,4,5,6").is_err());
        assert!(parse_sides("a,b,c").is_err());
        assert!(parse_sides("").is_err());
    }

    #[test]
    fn csv_batch_reads_int_and_float_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangles.csv");
        std::fs::write(&path, "side1,side2,side3\n3,4,5\n6.0,8.0,10.0\n").unwrap();
        let ts = read_triangles_csv(&path).unwrap();
        assert_eq!(ts.len(), 2);
        assert_eq!(ts[0].sides_sorted(), [3.0, 4.0, 5.0]);
        assert_eq!(ts[1].sides_sorted(), [6.0, 8.0, 10.0]);
    }

    #[test]
    fn csv_batch_requires_side_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_triangles_csv(&path).is_err());
    }
}
