//! Target definitions - what gets built for.
//!
//! A target is a (OS, architecture) pair plus the debug and self-contained
//! switches. The pair fully determines the GN option set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors produced while resolving a build target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// The OS name did not match any known alias.
    #[error("unsupported target OS: {0}")]
    UnknownOs(String),

    /// The architecture is not buildable on the given OS.
    #[error("unsupported architecture {arch} for {os}")]
    UnsupportedArch { arch: Arch, os: TargetOs },

    /// The architecture name did not parse.
    #[error("unknown architecture: {0}")]
    UnknownArch(String),
}

/// Canonical target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Linux,
    Macos,
    Windows,
}

impl TargetOs {
    /// Resolve a free-form OS name ("mac", "darwin", "win", ...) to its
    /// canonical form. Unrecognized input is a hard error.
    pub fn from_alias(name: &str) -> Result<Self, TargetError> {
        match name {
            "linux" => Ok(TargetOs::Linux),
            "mac" | "macos" | "darwin" => Ok(TargetOs::Macos),
            "win" | "windows" => Ok(TargetOs::Windows),
            other => Err(TargetError::UnknownOs(other.to_string())),
        }
    }

    /// Canonical name, used in directory names and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetOs::Linux => "linux",
            TargetOs::Macos => "macos",
            TargetOs::Windows => "windows",
        }
    }

    /// The name GN expects in `target_os`.
    pub fn gn_name(&self) -> &'static str {
        match self {
            TargetOs::Linux => "linux",
            TargetOs::Macos => "mac",
            TargetOs::Windows => "win",
        }
    }

    /// Architectures buildable on this OS.
    pub fn supported_archs(&self) -> &'static [Arch] {
        match self {
            TargetOs::Linux => &[Arch::X64, Arch::Arm64, Arch::Arm],
            TargetOs::Macos => &[Arch::X64, Arch::Arm64],
            TargetOs::Windows => &[Arch::X64, Arch::Arm64],
        }
    }

    /// Check whether `arch` is buildable on this OS.
    pub fn supports(&self, arch: Arch) -> bool {
        self.supported_archs().contains(&arch)
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X64,
    Arm64,
    Arm,
}

impl Arch {
    /// The name GN expects in `target_cpu`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
            Arch::Arm => "arm",
        }
    }

    /// LLVM triple-style architecture name.
    pub fn llvm_name(&self) -> &'static str {
        match self {
            Arch::X64 => "x86_64",
            Arch::Arm64 => "aarch64",
            Arch::Arm => "armv7a",
        }
    }
}

impl FromStr for Arch {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x64" => Ok(Arch::X64),
            "arm64" => Ok(Arch::Arm64),
            "arm" => Ok(Arch::Arm),
            other => Err(TargetError::UnknownArch(other.to_string())),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully-specified build target.
///
/// Immutable once constructed; the orchestrator builds one per invocation
/// and discards it when the target's artifacts are in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    pub os: TargetOs,
    pub arch: Arch,
    pub self_contained: bool,
    pub debug: bool,
}

impl TargetDescriptor {
    /// Construct a descriptor, rejecting unsupported (os, arch) pairs.
    pub fn new(
        os: TargetOs,
        arch: Arch,
        self_contained: bool,
        debug: bool,
    ) -> Result<Self, TargetError> {
        if !os.supports(arch) {
            return Err(TargetError::UnsupportedArch { arch, os });
        }
        Ok(TargetDescriptor {
            os,
            arch,
            self_contained,
            debug,
        })
    }

    /// Directory name for this target's build and artifact trees,
    /// e.g. `linux_x64` or `windows_arm64_debug`.
    pub fn dir_name(&self) -> String {
        let mut name = format!("{}_{}", self.os.as_str(), self.arch.as_str());
        if self.debug {
            name.push_str("_debug");
        }
        name
    }
}
