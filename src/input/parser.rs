use serde_json::Value;

use crate::geometry::{MultiPolygon, Polygon, PolygonError};

/// Convert an untyped JSON value into a validated polygon.
///
/// The value must be an array of at least 3 elements, each a two-element
/// array of numbers. Checks run in construction order: vertex count first,
/// then each element's shape, then each component's type, in input order.
/// A value that is not an array supplies no vertices and fails the count
/// check.
pub fn polygon_from_value(value: &Value) -> Result<Polygon, PolygonError> {
    Polygon::new(vertices_from_value(value)?)
}

/// Convert an untyped JSON value into a polygon collection.
///
/// The outer array holds one vertex list per member and may be empty. The
/// first invalid member aborts the whole conversion with that member's
/// error.
pub fn multi_polygon_from_value(value: &Value) -> Result<MultiPolygon, PolygonError> {
    let rings = value.as_array().map(Vec::as_slice).unwrap_or_default();
    let polygons = rings
        .iter()
        .map(polygon_from_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiPolygon::from_polygons(polygons))
}

/// Convert a JSON value holding either a single vertex ring or a list of
/// rings into a collection.
///
/// `[[x, y], ...]` is promoted to a one-member collection;
/// `[[[x, y], ...], ...]` is taken as-is. The first element's shape decides
/// which layout the value uses.
pub fn collection_from_value(value: &Value) -> Result<MultiPolygon, PolygonError> {
    if is_single_ring(value) {
        let polygon = polygon_from_value(value)?;
        return Ok(MultiPolygon::from_polygons(vec![polygon]));
    }
    multi_polygon_from_value(value)
}

fn is_single_ring(value: &Value) -> bool {
    // A ring's first element is a coordinate pair; a collection's first
    // element is itself an array of pairs
    match value.as_array().and_then(|items| items.first()) {
        Some(first) => first
            .as_array()
            .is_some_and(|pair| pair.first().is_none_or(|c| !c.is_array())),
        None => false,
    }
}

fn vertices_from_value(value: &Value) -> Result<Vec<(f64, f64)>, PolygonError> {
    let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
    if items.len() < 3 {
        return Err(PolygonError::InvalidVertexCount { count: items.len() });
    }

    let mut vertices = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let pair = item
            .as_array()
            .filter(|pair| pair.len() == 2)
            .ok_or(PolygonError::MalformedVertex { index })?;
        let x = pair[0]
            .as_f64()
            .ok_or(PolygonError::NonNumericCoordinate { index })?;
        let y = pair[1]
            .as_f64()
            .ok_or(PolygonError::NonNumericCoordinate { index })?;
        vertices.push((x, y));
    }

    Ok(vertices)
}
