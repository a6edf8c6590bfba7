use thiserror::Error;

use crate::geometry::Bounds;

/// Construction-time validation failures for polygon input.
///
/// All validation happens eagerly at construction; once a polygon exists,
/// queries cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than 3 vertices cannot enclose any area
    #[error("vertex list too short: got {count} vertices, need at least 3")]
    InvalidVertexCount { count: usize },

    /// Vertex at `index` is not a two-component pair
    #[error("invalid vertex at index {index}: not a two-component pair")]
    MalformedVertex { index: usize },

    /// Vertex at `index` has a component that is not a number
    #[error("invalid vertex at index {index}: non-numeric coordinate")]
    NonNumericCoordinate { index: usize },
}

/// A simple 2D polygon defined by an ordered vertex ring.
///
/// Vertices are stored exactly as supplied: order preserved, no
/// deduplication, no explicit ring closure (the containment loop wraps the
/// last vertex back to the first). The polygon is immutable after
/// construction, so concurrent read-only querying needs no synchronization.
///
/// Simplicity (no self-intersection) is assumed, not checked; the even-odd
/// rule still yields a well-defined result for self-intersecting input.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
}

impl Polygon {
    /// Create a polygon from an ordered list of vertices.
    ///
    /// Fails with `InvalidVertexCount` when fewer than 3 vertices are
    /// supplied. Non-finite coordinates are not rejected; queries touching
    /// them return a deterministic but unspecified answer.
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::InvalidVertexCount {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Test whether a point lies inside the polygon.
    ///
    /// Even-odd (crossing-number) ray casting: the point is inside iff a
    /// horizontal ray cast from it in the +x direction crosses the boundary
    /// an odd number of times. Points exactly on an edge or vertex get
    /// rule-dependent results; the comparison directions below decide them
    /// and are part of the observable contract.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let (xi, yi) = self.vertices[i];
            let (xj, yj) = self.vertices[j];

            // Edge must straddle the query y, and the crossing must lie
            // strictly to the right of the query point
            if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// The vertex ring, exactly as supplied at construction
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Number of vertices (always at least 3)
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounding box of the vertex ring
    pub fn bounds(&self) -> Bounds {
        // Unwrap ok: construction guarantees at least 3 vertices
        Bounds::from_points(&self.vertices).unwrap()
    }
}
