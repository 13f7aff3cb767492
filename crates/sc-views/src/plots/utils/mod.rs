//! Shared plotting helpers

pub mod colors;
