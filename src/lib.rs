//! Concave boundary polygons for 2D point sets.
//!
//! The convex hull of the input is carved inward, one edge at a time, by
//! pulling interior points onto the boundary while the dent angle stays under
//! a concavity threshold and the polygon stays simple.

pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{HullError, Result};
pub use operations::hull::{ConcaveHull, HullParams};
