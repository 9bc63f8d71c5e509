//! Procedural noise kernels for voxel terrain density.
//!
//! - [`GradientNoise`]: continuous `[-1, 1]` primitive, backed by simplex noise.
//! - Octave combiners: plain, billow-strange and billow/ridged mix fractal sums.
//! - Cellular: 3D Worley edge value from the three nearest jittered features.
//! - Voronoi: 2D border distance with a per-cell id.
//!
//! Everything here is a pure function of its inputs. The only shared state is
//! the baked [`CELL_3D`] table, so samplers can be used from any number of
//! threads without synchronisation.

mod cell_table;
mod cellular;
mod gradient;
mod octave;
mod voronoi;

pub use cell_table::CELL_3D;
pub use cellular::{
    CellDistances, LatticeOrigin, cellular3_distances, cellular3_edge, cellular3_edge_with,
};
pub use gradient::{GradientNoise, SimplexGradient};
pub use octave::{
    BILLOW_STRANGE_FREQ_MUL, OctaveParams, OctaveSampler, OctaveVariant, octave_billow_ridged,
    octave_billow_strange, octave_plain,
};
pub use voronoi::{hash2_2, voronoi_distance};
