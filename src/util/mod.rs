//! Shared helpers.

/// Injectable random source and shaped draws.
pub mod random;
