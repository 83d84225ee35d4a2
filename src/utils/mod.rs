//! Small utilities shared across the crate.

pub mod json_ext;
