pub mod traits;
pub mod result;
pub mod matrix;
pub mod floyd_warshall;
pub mod reconstruct;

pub use traits::AllPairsAlgorithm;
pub use result::AllPairsResult;
