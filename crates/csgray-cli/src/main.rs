//! csgray CLI - fire rays at CSG solids
//!
//! Probes the built-in demo solids with a single ray and reports the visible
//! surface point, or every crossing along the ray.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csgray_math::{Point3, Vec3};
use csgray_trace::{collect_intersections, Geometry, Intersection, Ray, TraceSettings};
use log::debug;
use serde::Serialize;

mod demo;
mod logger;

#[derive(Parser)]
#[command(name = "csgray")]
#[command(about = "Fire rays at constructive solid geometry", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in demo solids
    Shapes,
    /// Fire one ray at a demo solid
    Probe {
        /// Demo solid name
        shape: String,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        /// Ray direction as x,y,z (need not be unit length)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
        /// Ignore hits at or beyond this distance
        #[arg(long)]
        max_dist: Option<f64>,
        /// TOML file with enumeration settings
        #[arg(long)]
        settings: Option<PathBuf>,
        /// List every surface crossing instead of the nearest hit
        #[arg(long)]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// One reported hit, in a serializable shape.
#[derive(Debug, Serialize)]
struct HitReport {
    dist: f64,
    point: [f64; 3],
    normal: [f64; 3],
    uv: [f64; 2],
    owner: Option<u64>,
    label: Option<&'static str>,
}

impl HitReport {
    fn new(hit: &Intersection, demo: &demo::Demo) -> Self {
        Self {
            dist: hit.dist,
            point: [hit.point.x, hit.point.y, hit.point.z],
            normal: [hit.normal.x, hit.normal.y, hit.normal.z],
            uv: [hit.uv.x, hit.uv.y],
            owner: hit.owner.map(|id| id.get()),
            label: hit.owner.and_then(|id| demo.label(id)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match cli.command {
        Commands::Shapes => {
            for (name, description) in demo::DEMOS {
                println!("{name:<8} {description}");
            }
        }
        Commands::Probe {
            shape,
            origin,
            direction,
            max_dist,
            settings,
            all,
            json,
        } => {
            let settings = load_settings(settings.as_deref())?;
            let demo = demo::build(&shape, settings)?;
            let ray = Ray::try_new(Point3::from(origin), direction)?;
            debug!("probing {shape} with {ray:?}");

            let reports: Vec<HitReport> = if all {
                collect_intersections(demo.geometry.as_ref(), &ray, &settings)
                    .iter()
                    .filter(|hit| max_dist.map_or(true, |max| hit.dist < max))
                    .map(|hit| HitReport::new(hit, &demo))
                    .collect()
            } else {
                let mut hit = Intersection::within(max_dist.unwrap_or(f64::INFINITY));
                if demo.geometry.intersect(&ray, &mut hit) {
                    vec![HitReport::new(&hit, &demo)]
                } else {
                    Vec::new()
                }
            };

            print_reports(&reports, json)?;
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<TraceSettings> {
    let Some(path) = path else {
        return Ok(TraceSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = TraceSettings::from_toml_str(&text)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    debug!("loaded {settings:?} from {}", path.display());
    Ok(settings)
}

fn print_reports(reports: &[HitReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("miss");
    }
    for report in reports {
        let [px, py, pz] = report.point;
        let [nx, ny, nz] = report.normal;
        println!(
            "hit {} at t={:.6} point=({px:.6}, {py:.6}, {pz:.6}) normal=({nx:.4}, {ny:.4}, {nz:.4}) uv=({:.4}, {:.4})",
            report.label.unwrap_or("?"),
            report.dist,
            report.uv[0],
            report.uv[1],
        );
    }
    Ok(())
}

/// Parse `x,y,z` into a vector.
fn parse_vec3(text: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{text}'"));
    }
    let mut coords = [0.0; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate '{part}': {e}"))?;
    }
    Ok(Vec3::new(coords[0], coords[1], coords[2]))
}
