//! Spherical geodesy and land/sea classification for SKYWATCH.
//!
//! Pure functions over a 6371 km sphere: coordinate conversion, forward
//! geodesics, ring and corridor sampling, and the coarse continent mask.

pub use skywatch_core as core;

pub mod landmask;
pub mod paths;
pub mod sphere;

// Re-export key items for convenience.
pub use landmask::{tsunami_concern, ContinentBoxes, SurfaceClassifier};
pub use paths::{corridor_path, great_circle_ring};
pub use sphere::{destination_point, lat_lon_to_vec, vec_to_lat_lon};
