//! Command handlers, one module per command family.

pub mod config;
pub mod crypto;
pub mod exec;
pub mod misc;
pub mod text;
