//! Occupancy and falloff primitives for stamping structures into a density field.
//!
//! Each primitive maps a sample point to a weight: `1` fully inside, `0`
//! outside, or a smooth value in between near the boundary for the falloff
//! shapes. They are not signed distances. Compound structures are built by
//! the caller with `max` (union), `min` (intersection) or `lerp`.

mod falloff;
mod occupancy;
mod shape;

pub use falloff::{ConeParams, arch_carve, cone};
pub use occupancy::{box_dented_x, box_dented_z, box_occupancy, cylinder_y, triangle_prism_x};
pub use shape::{Shape, union};
