//! Shader-style scalar and vector helpers shared by the Strata density kernels.
//!
//! These mirror the semantics density-field code is usually written against
//! (`saturate`, `lerp`, `unlerp`, floor-based `frac`), so kernels can be
//! expressed directly in terms of them without drifting from the reference
//! behaviour at edge cases such as negative inputs or `.5` ties.

mod scalar;
mod vector;

pub use scalar::{change_steepness, frac, lerp, nfmod, round_even, saturate, select, unlerp};
pub use vector::{frac2, frac3};
