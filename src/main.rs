use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use pnpoly::geometry::MultiPolygon;
use pnpoly::input::{load_points, load_polygons, parse_point};

/// Test whether points fall inside a polygon or polygon collection
///
/// Examples:
///   # Single point against a polygon file
///   pnpoly -p shapes.json --point 0.5,0.5
///
///   # Several points, with polygon statistics
///   pnpoly -p shapes.json --point 0,0 --point 1.5,1.5 -v
///
///   # Batch of points from a file, JSON output
///   pnpoly -p shapes.json --points queries.json --format json
///
/// Polygon files hold either a single vertex ring [[x, y], ...] or a list
/// of rings [[[x, y], ...], ...]. Points files hold [[x, y], ...].
#[derive(Parser, Debug)]
#[command(name = "pnpoly")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the polygon JSON file
    #[arg(short = 'p', long)]
    polygons: PathBuf,

    /// Query point as "X,Y" (repeatable)
    #[arg(long = "point", allow_hyphen_values = true)]
    point: Vec<String>,

    /// Path to a JSON file of query points
    #[arg(long)]
    points: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Print polygon statistics before the results
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct QueryResult {
    x: f64,
    y: f64,
    inside: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.point.is_empty() && args.points.is_none() {
        bail!("Must provide at least one query point via --point or --points");
    }

    let collection = load_polygons(&args.polygons)?;

    let mut query_points = Vec::new();
    for raw in &args.point {
        let point =
            parse_point(raw).with_context(|| format!("Invalid --point argument: {}", raw))?;
        query_points.push(point);
    }
    if let Some(ref path) = args.points {
        query_points.extend(load_points(path)?);
    }

    if args.verbose {
        print_collection_stats(&collection, &args.polygons);
    }

    let results: Vec<QueryResult> = query_points
        .iter()
        .map(|&(x, y)| QueryResult {
            x,
            y,
            inside: collection.contains(x, y),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for result in &results {
                println!(
                    "({}, {}) {}",
                    result.x,
                    result.y,
                    if result.inside { "inside" } else { "outside" }
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn print_collection_stats(collection: &MultiPolygon, source: &std::path::Path) {
    println!(
        "Loaded {} polygon(s) from {}",
        collection.len(),
        source.display()
    );
    for (i, polygon) in collection.polygons().iter().enumerate() {
        let bounds = polygon.bounds();
        println!(
            "  Polygon {}: {} vertices, bounds ({:.3}, {:.3}) to ({:.3}, {:.3})",
            i,
            polygon.vertex_count(),
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y
        );
    }
    println!();
}
