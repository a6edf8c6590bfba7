use crate::geometry::{Polygon, PolygonError};

/// An ordered collection of polygons queried as a single region.
///
/// A point is contained by the collection when any member contains it; the
/// empty collection contains nothing. Members are owned outright and, like
/// `Polygon`, immutable after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Build a collection from vertex lists, validating each member.
    ///
    /// Construction is atomic: the first invalid member aborts with exactly
    /// the error `Polygon::new` raises for it, and no partial collection is
    /// observable. An empty outer list is a valid zero-member collection.
    pub fn new(rings: Vec<Vec<(f64, f64)>>) -> Result<Self, PolygonError> {
        let polygons = rings
            .into_iter()
            .map(Polygon::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { polygons })
    }

    /// Compose a collection from already-validated polygons
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Test whether any member polygon contains the point.
    ///
    /// Short-circuits on the first match. Always false for the empty
    /// collection.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(x, y))
    }

    /// The member polygons, in construction order
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_ring() -> Vec<(f64, f64)> {
        vec![(-1.0, 0.0), (0.0, 1.0), (1.0, 0.0)]
    }

    fn square_ring() -> Vec<(f64, f64)> {
        vec![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]
    }

    #[test]
    fn test_empty_collection_contains_nothing() {
        let empty = MultiPolygon::new(vec![]).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.contains(0.0, 0.0));
        assert!(!empty.contains(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_disjoint_members() {
        let multi = MultiPolygon::new(vec![triangle_ring(), square_ring()]).unwrap();
        assert_eq!(multi.len(), 2);

        // Inside the triangle only
        assert!(multi.contains(0.0, 0.0));
        // Inside the square only
        assert!(multi.contains(1.5, 1.5));
        // Outside both
        assert!(!multi.contains(-10.0, -10.0));
    }

    #[test]
    fn test_membership_in_exactly_one_member_suffices() {
        let multi = MultiPolygon::new(vec![triangle_ring(), square_ring()]).unwrap();
        let [triangle, square] = multi.polygons() else {
            panic!("expected two members");
        };

        assert!(triangle.contains(0.0, 0.5) && !square.contains(0.0, 0.5));
        assert!(multi.contains(0.0, 0.5));

        assert!(!triangle.contains(1.5, 1.5) && square.contains(1.5, 1.5));
        assert!(multi.contains(1.5, 1.5));
    }

    #[test]
    fn test_construction_is_atomic() {
        let short = vec![(0.0, 0.0), (1.0, 1.0)];
        let result = MultiPolygon::new(vec![triangle_ring(), short]);
        assert_eq!(result, Err(PolygonError::InvalidVertexCount { count: 2 }));
    }

    #[test]
    fn test_from_polygons() {
        let triangle = Polygon::new(triangle_ring()).unwrap();
        let multi = MultiPolygon::from_polygons(vec![triangle]);
        assert_eq!(multi.len(), 1);
        assert!(multi.contains(0.0, 0.0));
    }
}
