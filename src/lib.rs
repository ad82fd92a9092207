//! Meshplot draws 2D triangle meshes.
//!
//! Build an [`Axes`], draw a triangulation on it with [`Axes::triplot`],
//! then hand it to a backend: [`svg::write`] or, with the `window` feature,
//! [`window::show`].

pub mod geometry;
pub mod mesh;
pub mod plot;
pub mod svg;
#[cfg(feature = "window")]
pub mod window;

pub use crate::geometry::BoundingBox;
pub use crate::geometry::Point2D;
pub use crate::plot::Aspect;
pub use crate::plot::Axes;

pub use nalgebra;
