//! This module has things for managing the domain,
//! which really means retrieving values based on world coordinates.
//! Buffers are laid out row major, so for a 2D plate
//! coordinate `[row, col]` lands at `row * (cols + 2) + col`.

mod bc;
mod view;

pub use bc::*;
pub use view::*;
