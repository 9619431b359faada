//! `<artifact>.provenance.json` sidecars describing how a point set or hull was made.
//!
//! A sidecar records the draw/input parameters plus a short summary of the
//! data actually written: point count and extent for point sets; pivot, hull
//! size and degeneracy for hull reports.

use crate::points::{HullReport, PointRow};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Axis-aligned extent of a point list.
#[derive(Debug, Serialize, PartialEq)]
pub struct Extent {
    pub min: PointRow,
    pub max: PointRow,
}

impl Extent {
    pub fn of(rows: &[PointRow]) -> Option<Self> {
        let first = *rows.first()?;
        let (min, max) = rows.iter().fold((first, first), |(lo, hi), r| {
            (
                PointRow {
                    x: lo.x.min(r.x),
                    y: lo.y.min(r.y),
                },
                PointRow {
                    x: hi.x.max(r.x),
                    y: hi.y.max(r.y),
                },
            )
        });
        Some(Self { min, max })
    }
}

/// Parameters, data summary, and tags for one artifact.
pub struct Sidecar {
    params: Value,
    summary: Value,
    tags: Vec<String>,
}

impl Sidecar {
    pub fn for_points(params: Value, rows: &[PointRow]) -> Self {
        Self {
            params,
            summary: json!({
                "points": rows.len(),
                "extent": Extent::of(rows),
            }),
            tags: Vec::new(),
        }
    }

    pub fn for_hull(params: Value, report: &HullReport) -> Self {
        Self {
            params,
            summary: json!({
                "points": report.points.len() + 1,
                "pivot": report.pivot,
                "hull_vertices": report.hull.len(),
                "degenerate": report.degenerate,
                "extent": Extent::of(&report.points),
            }),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tags.extend(tag);
        self
    }

    /// Write next to `artifact`; returns the sidecar path.
    pub fn write(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let doc = json!({
            "code_rev": code_rev(),
            "hullscan": hullscan::VERSION,
            "artifact": artifact.to_string_lossy(),
            "params": self.params,
            "summary": self.summary,
            "tags": self.tags,
        });
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "provenance");
        Ok(path)
    }
}

/// Block printed by `report`.
pub fn header(tag: Option<&str>) -> Value {
    json!({
        "code_rev": code_rev(),
        "hullscan": hullscan::VERSION,
        "tag": tag,
    })
}

/// `hull.json` → `hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` at build time, else at run time, else `"unknown"`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
