/// Axis-aligned bounding box in polygon coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Compute bounds from a set of points, or `None` for an empty set
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        Some(Self {
            min_x: points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min),
            max_x: points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max),
            min_y: points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min),
            max_y: points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max),
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed-interval point test.
    ///
    /// Usable as a cheap rejection filter before a full crossing-number
    /// query: a point outside the bounds is outside the polygon. The
    /// containment queries themselves do not consult it, so their observable
    /// behavior stays that of the bare edge loop.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![(0.0, 0.0), (10.0, 20.0), (5.0, -10.0)];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 10.0);
        assert_eq!(bounds.min_y, -10.0);
        assert_eq!(bounds.max_y, 20.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 30.0);
    }

    #[test]
    fn test_empty_points() {
        assert_eq!(Bounds::from_points(&[]), None);
    }

    #[test]
    fn test_contains_is_closed() {
        let bounds = Bounds::from_points(&[(0.0, 0.0), (4.0, 4.0)]).unwrap();
        assert!(bounds.contains(2.0, 2.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(4.0, 4.0));
        assert!(!bounds.contains(4.1, 2.0));
        assert!(!bounds.contains(2.0, -0.1));
    }
}
