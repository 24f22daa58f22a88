pub mod grid;
pub mod jacobi;
pub mod progress;
pub mod solver_parameters;

pub use grid::*;
pub use jacobi::*;
pub use progress::*;
pub use solver_parameters::*;
