//! GN argument file emission.

pub mod format;

pub use format::format_option_set;
