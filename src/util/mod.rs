//! Shared filesystem and subprocess utilities.

pub mod fs;
pub mod process;

/// Check a boolean-like environment flag; recognized only when set to the
/// literal value `"1"`.
pub fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}
