pub mod bounds;
pub mod multi;
pub mod polygon;

pub use bounds::Bounds;
pub use multi::MultiPolygon;
pub use polygon::{Polygon, PolygonError};
