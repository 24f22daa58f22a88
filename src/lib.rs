pub mod build_info;
pub mod csv;
pub mod domain;
pub mod error;
pub mod example_util;
pub mod image;
pub mod laplace_example;
pub mod matmul;
pub mod matmul_example;
pub mod par_slice;
pub mod solver;
pub mod stencil;
pub mod util;
