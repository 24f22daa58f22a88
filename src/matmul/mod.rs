//! Dense square matrix multiply and the iterate / copy benchmark built on it.

mod benchmark;
mod kernels;
mod matrix;

pub use benchmark::*;
pub use kernels::*;
pub use matrix::*;
