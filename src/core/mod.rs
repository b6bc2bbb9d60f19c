//! Core utilities shared by every engine layer.

#[macro_use]
pub mod utils;
