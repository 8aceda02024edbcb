//! Umbrella header synthesis from generated build metadata.

pub mod defines;
pub mod synthesize;

pub use defines::{extract_defines, filter_skia_defines};
pub use synthesize::synthesize_header;
