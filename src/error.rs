use thiserror::Error;

use crate::VertIdx;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The symbol set was empty or contained duplicates
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two distinct vertices were projected onto the same 3D point
    #[error("Vertices {a:?} and {b:?} map to the same coordinate")]
    CoordinateCollision { a: VertIdx, b: VertIdx },
}
