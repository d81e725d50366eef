//! Utility function module

pub mod text;
