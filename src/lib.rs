pub mod analytical;
pub mod build_info;
pub mod cli;
pub mod csv;
pub mod error;
pub mod grid;
pub mod image;
pub mod problem;
pub mod scheme;
pub mod simulation;
pub mod tridiagonal;

pub use error::{Error, Result};
