pub mod node_arena;
pub mod square_matrix;

pub use node_arena::NodeArena;
pub use square_matrix::SquareMatrix;
