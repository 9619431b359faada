//! Point-list I/O: CSV/Parquet via Polars (`x`, `y` columns) and JSON via serde.

use anyhow::{bail, Context, Result};
use hullscan::{Hull, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized point: `{"x": .., "y": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointRow {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point::new(r.x, r.y)
    }
}

pub fn rows(points: &[Point]) -> Vec<PointRow> {
    points.iter().copied().map(PointRow::from).collect()
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Serialize, Deserialize)]
pub struct HullReport {
    pub pivot: PointRow,
    pub points: Vec<PointRow>,
    pub sorted: Vec<PointRow>,
    pub hull: Vec<PointRow>,
    pub degenerate: bool,
}

impl HullReport {
    pub fn new(pivot: Point, points: &[Point], sorted: &[Point], hull: &Hull) -> Self {
        Self {
            pivot: pivot.into(),
            points: rows(points),
            sorted: rows(sorted),
            hull: rows(hull.as_slice()),
            degenerate: hull.is_degenerate(),
        }
    }
}

/// Load points by extension: `.csv`, `.parquet`, otherwise JSON.
pub fn load(path: &str) -> Result<Vec<Point>> {
    if path.ends_with(".csv") {
        let lf = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {path}"))?;
        from_frame(lf, path)
    } else if path.ends_with(".parquet") {
        let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("reading {path}"))?;
        from_frame(lf, path)
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
        let rows: Vec<PointRow> =
            serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))?;
        Ok(rows.into_iter().map(Point::from).collect())
    }
}

fn from_frame(lf: LazyFrame, path: &str) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x/y columns from {path}"))?;
    tracing::info!(rows = df.height(), path, "input_points_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("{path}: row {row} has a missing coordinate"),
        }
    }
    Ok(out)
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
