//! The external two-stage build pipeline.
//!
//! Project generation (`gn gen`) and compilation (`ninja`) are opaque,
//! blocking, all-or-nothing collaborators. They sit behind a trait so the
//! orchestrator can be exercised in tests without real tools installed.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::util::process::{find_executable, ProcessBuilder};

/// One external build step: run in the source root against a build
/// directory, succeed or fail. No retries, no cancellation.
pub trait BuildPipeline {
    /// Generate the project files for `build_dir` (consumes its `args.gn`).
    fn generate(&self, build_dir: &Path) -> Result<()>;

    /// Compile everything in `build_dir`.
    fn compile(&self, build_dir: &Path) -> Result<()>;
}

/// The real pipeline: `gn gen` then `ninja -C`, invoked from the Skia
/// source root with `depot_tools` prepended to `PATH`.
pub struct GnNinjaPipeline {
    skia_dir: PathBuf,
    depot_tools: PathBuf,
}

impl GnNinjaPipeline {
    pub fn new(skia_dir: impl Into<PathBuf>) -> Self {
        let skia_dir = skia_dir.into();
        let depot_tools = skia_dir
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("depot_tools");
        GnNinjaPipeline {
            skia_dir,
            depot_tools,
        }
    }

    /// `PATH` with depot_tools in front, so gn/ninja wrappers there win.
    fn tool_path_env(&self) -> String {
        let sep = if cfg!(windows) { ';' } else { ':' };
        let current = std::env::var("PATH").unwrap_or_default();
        format!("{}{}{}", self.depot_tools.display(), sep, current)
    }

    fn gn_program(&self) -> PathBuf {
        if cfg!(windows) {
            // The batch wrapper must be used on Windows; invoking the bare
            // gn binary bypasses depot_tools' toolchain setup.
            self.depot_tools.join("gn.bat")
        } else {
            find_executable("gn").unwrap_or_else(|| PathBuf::from("gn"))
        }
    }

    fn ninja_program(&self) -> PathBuf {
        find_executable("ninja").unwrap_or_else(|| PathBuf::from("ninja"))
    }

    fn command(&self, program: PathBuf) -> ProcessBuilder {
        ProcessBuilder::new(program)
            .cwd(&self.skia_dir)
            .env("PATH", self.tool_path_env())
    }
}

impl BuildPipeline for GnNinjaPipeline {
    fn generate(&self, build_dir: &Path) -> Result<()> {
        let cmd = self.command(self.gn_program()).arg("gen").arg(build_dir);
        info!("running `{}`", cmd.display_command());
        cmd.exec_streaming()
    }

    fn compile(&self, build_dir: &Path) -> Result<()> {
        let cmd = self
            .command(self.ninja_program())
            .arg("-C")
            .arg(build_dir);
        info!("running `{}`", cmd.display_command());
        cmd.exec_streaming()
    }
}
