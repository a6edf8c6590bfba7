pub mod parser;

pub use parser::{collection_from_value, multi_polygon_from_value, polygon_from_value};

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::geometry::MultiPolygon;

/// Load polygons from a JSON file.
///
/// The file holds either a single vertex ring `[[x, y], ...]` or a list of
/// rings `[[[x, y], ...], ...]`; either way the result is a collection.
pub fn load_polygons(path: &Path) -> Result<MultiPolygon> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read polygon file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse polygon file as JSON: {}", path.display()))?;
    let collection = collection_from_value(&value)
        .with_context(|| format!("Invalid polygon data in {}", path.display()))?;
    Ok(collection)
}

/// Load query points from a JSON file of `[x, y]` pairs
pub fn load_points(path: &Path) -> Result<Vec<(f64, f64)>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read points file: {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse points file as JSON: {}", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| (x, y)).collect())
}

/// Parse an `X,Y` command-line point argument
pub fn parse_point(arg: &str) -> Result<(f64, f64)> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y but got: {arg}"))?;
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x coordinate: {x}"))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y coordinate: {y}"))?;
    Ok((x, y))
}
