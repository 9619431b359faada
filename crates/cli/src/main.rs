use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hullscan::geom2::rand::ReplayToken;
use hullscan::geom2::{PointSource, Scene};
use hullscan::{Bounds, IntPoint, Point};
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{HullReport, PointRow};
use provenance::Sidecar;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Random point sets and their convex hulls")]
struct Cmd {
    /// Optional free-form tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random point set and write it as JSON
    Generate {
        #[command(flatten)]
        draw: DrawArgs,
        #[arg(long)]
        out: String,
    },
    /// Compute pivot, angular order, and hull of a point set
    Hull {
        /// Points file (.csv/.parquet with x,y columns, or JSON); draws from bounds if absent
        #[arg(
            long,
            conflicts_with_all = ["ll_x", "ll_y", "ur_x", "ur_y", "canvas", "count", "seed", "index"]
        )]
        input: Option<String>,
        #[command(flatten)]
        draw: DrawArgs,
        /// Report path; printed to stdout if absent
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct DrawArgs {
    #[arg(long, default_value_t = 10)]
    ll_x: u32,
    #[arg(long, default_value_t = 10)]
    ll_y: u32,
    #[arg(long, default_value_t = 460)]
    ur_x: u32,
    #[arg(long, default_value_t = 250)]
    ur_y: u32,
    /// Drawing surface `WIDTHxHEIGHT`; overrides the corners with inset bounds
    #[arg(long, value_parser = parse_canvas)]
    canvas: Option<Canvas>,
    #[arg(long, default_value_t = 20)]
    count: usize,
    /// Seed for a reproducible draw; thread-local entropy if absent
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 0)]
    index: u64,
}

impl DrawArgs {
    fn bounds(&self) -> Bounds {
        match self.canvas {
            Some(c) => Bounds::for_canvas(c.width, c.height, self.count),
            None => Bounds::new(
                IntPoint::new(self.ll_x, self.ll_y),
                IntPoint::new(self.ur_x, self.ur_y),
                self.count,
            ),
        }
    }

    fn params(&self) -> serde_json::Value {
        let b = self.bounds();
        json!({
            "lower_left": [b.lower_left.x, b.lower_left.y],
            "upper_right": [b.upper_right.x, b.upper_right.y],
            "count": b.count,
            "seed": self.seed,
            "index": self.index,
        })
    }

    fn draw(&self) -> Result<Vec<Point>> {
        let bounds = self.bounds();
        let points = match self.seed {
            Some(seed) => {
                hullscan::api::generate_seeded(bounds, ReplayToken::new(seed, self.index))?
            }
            None => hullscan::api::generate(bounds)?,
        };
        Ok(points)
    }
}

/// Drawing surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Canvas {
    width: u32,
    height: u32,
}

fn parse_canvas(s: &str) -> Result<Canvas, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let height = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
    Ok(Canvas { width, height })
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { draw, out } => generate(draw, out, cmd.tag),
        Action::Hull { input, draw, out } => hull(input, draw, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn generate(draw: DrawArgs, out: String, tag: Option<String>) -> Result<()> {
    let bounds = draw.bounds();
    tracing::info!(?bounds, seed = ?draw.seed, index = draw.index, tag = ?tag, "generate");
    let rows = points::rows(&draw.draw()?);
    let out_path = Path::new(&out);
    points::write_json(out_path, &rows)?;
    tracing::info!(points = rows.len(), out, "generated");
    Sidecar::for_points(draw.params(), &rows)
        .with_tag(tag)
        .write(out_path)?;
    Ok(())
}

fn hull(
    input: Option<String>,
    draw: DrawArgs,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = ?input, tag = ?tag, "hull");
    let scene = match (&input, draw.seed) {
        (Some(path), _) => hullscan::api::scene(PointSource::Points(points::load(path)?))?,
        (None, Some(seed)) => {
            Scene::replay(draw.bounds(), ReplayToken::new(seed, draw.index))?
        }
        (None, None) => hullscan::api::scene(PointSource::Bounds(draw.bounds()))?,
    };
    let sorted = scene.sorted();
    let hull = scene.hull()?;
    let pivot = PointRow::from(scene.pivot);
    tracing::info!(
        points = scene.point_count(),
        pivot_x = pivot.x,
        pivot_y = pivot.y,
        vertices = hull.len(),
        "hull_built"
    );
    if hull.is_degenerate() {
        tracing::warn!(vertices = hull.len(), "degenerate hull (fewer than 3 vertices)");
    }
    let report = HullReport::new(scene.pivot, &scene.points, &sorted, &hull);
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            points::write_json(out_path, &report)?;
            let params = match &input {
                Some(path) => json!({ "input": path }),
                None => draw.params(),
            };
            Sidecar::for_hull(params, &report).with_tag(tag).write(out_path)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::header(tag.as_deref()))?
    );
    Ok(())
}
