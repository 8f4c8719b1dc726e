// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{run, Args};
pub use crate::core::normalize::normalize;
pub use crate::core::pipeline::{count_file, count_reader};
pub use crate::core::table::FrequencyTable;
pub use crate::models::Entry;
