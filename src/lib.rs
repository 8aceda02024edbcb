//! Slipway - a build driver for Skia static libraries.
//!
//! This crate provides the core library functionality for Slipway:
//! platform profile resolution, `args.gn` emission, umbrella header
//! synthesis, and artifact collection around the external `gn`/`ninja`
//! pipeline.

pub mod core;
pub mod gn;
pub mod header;
pub mod ops;
pub mod profile;
pub mod util;

pub use crate::core::options::{GnValue, OptionSet};
pub use crate::core::target::{Arch, TargetDescriptor, TargetError, TargetOs};

pub use crate::ops::build::BuildEnv;
pub use crate::ops::pipeline::{BuildPipeline, GnNinjaPipeline};
