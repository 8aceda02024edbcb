//! Core data model: targets and build option sets.

pub mod options;
pub mod target;
