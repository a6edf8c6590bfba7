//! pnpoly - Point-in-polygon membership tests for simple 2D polygons

pub mod geometry;
pub mod input;

pub use geometry::{Bounds, MultiPolygon, Polygon, PolygonError};
