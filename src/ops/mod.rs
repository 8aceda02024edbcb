//! High-level operations: target builds and header collection.

pub mod build;
pub mod headers;
pub mod pipeline;
