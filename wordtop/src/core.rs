// src/core.rs
pub mod normalize;
pub mod pipeline;
pub mod table;
