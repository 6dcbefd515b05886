//! The permutohedron of order 4: the polytope whose 24 vertices are the permutations of
//! `{1, 2, 3, 4}` and whose 36 edges join permutations differing by one swap of neighbouring
//! positions.
//!
//! [`Permutohedron::new`] generates the vertices, maps them to 3D, derives edges and faces and
//! returns an immutable model which renderers and other collaborators only read.

pub mod adjacency;
pub mod coords;
mod error;
pub mod faces;
pub mod meshes;
pub mod permutation;
pub mod polytope;
pub mod utils;

pub use error::Error;
pub use faces::Face;
pub use permutation::Permutation;
pub use polytope::{EdgeId, Permutohedron, Ray, VertIdx, VertVec};

/// The value type of a single symbol in a [`Permutation`].
pub type Symbol = i32;

/// The symbol set which the model is built from.
pub const SYMBOLS: [Symbol; 4] = [1, 2, 3, 4];
