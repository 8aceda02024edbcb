//! Implementation of `slipway build` - the per-target orchestrator.
//!
//! One target flows through: profile resolution -> `args.gn` emission ->
//! external generate/compile -> artifact collection -> umbrella header
//! synthesis. Targets are processed strictly one at a time; the
//! "all architectures" fan-out is sequential and aborts on first failure.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::target::{Arch, TargetDescriptor, TargetOs};
use crate::gn::format_option_set;
use crate::header::{extract_defines, filter_skia_defines, synthesize_header};
use crate::ops::pipeline::BuildPipeline;
use crate::profile;
use crate::util::env_flag;
use crate::util::fs::{copy_matching, ensure_dir, remove_dir_all_if_exists, write_string};

/// Relative location of the defines metadata inside a build directory.
const METADATA_PATH: &str = "obj/public_headers_warnings_check.ninja";

/// Relative location of the generated umbrella header template.
const TEMPLATE_PATH: &str = "gen/skia.h";

/// Skip invoking the external build tools (config-only dry run).
pub const SKIP_BUILD_ENV: &str = "SLIPWAY_SKIP_BUILD";

/// Delete the intermediate build directory after artifact collection.
pub const SAVE_SPACE_ENV: &str = "SLIPWAY_SAVE_SPACE";

/// Paths and switches shared by every target of one invocation.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    /// Skia source root; build dirs live under `<skia_dir>/out/`.
    pub skia_dir: PathBuf,
    /// Artifact root, a sibling of the source root.
    pub artifacts_dir: PathBuf,
    /// Skip the external generate/compile steps.
    pub skip_tools: bool,
    /// Reclaim the build directory once artifacts are collected.
    pub save_space: bool,
}

impl BuildEnv {
    /// Build an environment rooted at `skia_dir`, reading the
    /// `SLIPWAY_SKIP_BUILD` / `SLIPWAY_SAVE_SPACE` flags from the process
    /// environment (recognized only as the literal `"1"`).
    pub fn new(skia_dir: impl Into<PathBuf>) -> Self {
        let skia_dir = skia_dir.into();
        let artifacts_dir = skia_dir
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("artifacts");
        BuildEnv {
            skia_dir,
            artifacts_dir,
            skip_tools: env_flag(SKIP_BUILD_ENV),
            save_space: env_flag(SAVE_SPACE_ENV),
        }
    }

    fn build_dir(&self, target: &TargetDescriptor) -> PathBuf {
        self.skia_dir.join("out").join(target.dir_name())
    }

    fn artifact_dir(&self, target: &TargetDescriptor) -> PathBuf {
        self.artifacts_dir.join(target.dir_name())
    }
}

/// Build one target end to end.
pub fn build_target(
    env: &BuildEnv,
    pipeline: &dyn BuildPipeline,
    target: &TargetDescriptor,
) -> Result<()> {
    let opts = profile::resolve(target)?;
    let build_dir = env.build_dir(target);

    write_string(&build_dir.join("args.gn"), &format_option_set(&opts))?;
    info!("configured {} at {}", target.dir_name(), build_dir.display());

    if env.skip_tools {
        info!("{} set; skipping external build tools", SKIP_BUILD_ENV);
    } else {
        pipeline
            .generate(&build_dir)
            .with_context(|| format!("project generation failed for {}", target.dir_name()))?;
        pipeline
            .compile(&build_dir)
            .with_context(|| format!("compilation failed for {}", target.dir_name()))?;
    }

    collect_artifacts(env, target, &build_dir)?;

    if env.save_space {
        info!("removing build directory {}", build_dir.display());
        remove_dir_all_if_exists(&build_dir)?;
    }
    Ok(())
}

/// Clear and repopulate the artifact tree for one target.
///
/// The directory is deleted and rebuilt wholesale so no stale files from a
/// previous run survive.
fn collect_artifacts(env: &BuildEnv, target: &TargetDescriptor, build_dir: &Path) -> Result<()> {
    let artifact_dir = env.artifact_dir(target);
    remove_dir_all_if_exists(&artifact_dir)?;
    ensure_dir(&artifact_dir)?;

    let lib_dir = artifact_dir.join("lib");
    ensure_dir(&lib_dir)?;
    copy_matching(build_dir, &lib_dir, ".a")?;
    copy_matching(build_dir, &lib_dir, ".lib")?;

    let template = build_dir.join(TEMPLATE_PATH);
    if template.exists() {
        let defines = filter_skia_defines(extract_defines(&build_dir.join(METADATA_PATH))?);
        let header = synthesize_header(&template, &defines)?;
        write_string(&artifact_dir.join("skia.h"), &header)?;
    } else {
        // Nothing was generated (dry run); there is no header to synthesize.
        warn!(
            "no generated header at {}; skipping header synthesis",
            template.display()
        );
    }

    info!("artifacts collected in {}", artifact_dir.display());
    Ok(())
}

/// Fan out over every architecture of `os` that "all" covers.
///
/// Sequential by design; the first failing architecture aborts the rest.
pub fn build_all_archs(
    env: &BuildEnv,
    pipeline: &dyn BuildPipeline,
    os: TargetOs,
    self_contained: bool,
    debug: bool,
) -> Result<()> {
    for arch in [Arch::X64, Arch::Arm64] {
        let target = TargetDescriptor::new(os, arch, self_contained, debug)?;
        build_target(env, pipeline, &target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records pipeline calls instead of running tools.
    #[derive(Default)]
    struct StubPipeline {
        calls: Mutex<Vec<String>>,
        fail_generate: bool,
    }

    impl BuildPipeline for StubPipeline {
        fn generate(&self, build_dir: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("gen {}", build_dir.display()));
            if self.fail_generate {
                anyhow::bail!("gn exploded");
            }
            Ok(())
        }

        fn compile(&self, build_dir: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("ninja {}", build_dir.display()));
            Ok(())
        }
    }

    fn dry_env(tmp: &TempDir) -> BuildEnv {
        BuildEnv {
            skia_dir: tmp.path().join("skia"),
            artifacts_dir: tmp.path().join("artifacts"),
            skip_tools: true,
            save_space: false,
        }
    }

    fn linux_x64() -> TargetDescriptor {
        TargetDescriptor::new(TargetOs::Linux, Arch::X64, false, false).unwrap()
    }

    #[test]
    fn test_dry_run_writes_args_gn() {
        let tmp = TempDir::new().unwrap();
        let env = dry_env(&tmp);
        let stub = StubPipeline::default();

        build_target(&env, &stub, &linux_x64()).unwrap();

        let args = fs::read_to_string(env.skia_dir.join("out/linux_x64/args.gn")).unwrap();
        assert!(args.contains("target_os = \"linux\""));
        assert!(args.contains("target_cpu = \"x64\""));
        assert!(args.contains("skia_use_vulkan = true"));
        assert!(args.contains("--sysroot=/sysroots/x86_64-linux-gnu"));
        assert!(args.contains("--target=x86_64-linux-gnu"));
        // Tools were never invoked.
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dry_run_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let env = dry_env(&tmp);
        let stub = StubPipeline::default();
        let target = linux_x64();
        let args_path = env.skia_dir.join("out/linux_x64/args.gn");

        build_target(&env, &stub, &target).unwrap();
        let first = fs::read(&args_path).unwrap();
        build_target(&env, &stub, &target).unwrap();
        let second = fs::read(&args_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pipeline_runs_generate_then_compile() {
        let tmp = TempDir::new().unwrap();
        let mut env = dry_env(&tmp);
        env.skip_tools = false;
        let stub = StubPipeline::default();

        build_target(&env, &stub, &linux_x64()).unwrap();

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("gen "));
        assert!(calls[1].starts_with("ninja "));
    }

    #[test]
    fn test_generate_failure_aborts_before_artifacts() {
        let tmp = TempDir::new().unwrap();
        let mut env = dry_env(&tmp);
        env.skip_tools = false;
        let stub = StubPipeline {
            fail_generate: true,
            ..Default::default()
        };

        let err = build_target(&env, &stub, &linux_x64()).unwrap_err();
        assert!(err.to_string().contains("project generation failed"));
        assert!(!env.artifacts_dir.join("linux_x64").exists());
    }

    #[test]
    fn test_stale_artifacts_are_cleared() {
        let tmp = TempDir::new().unwrap();
        let env = dry_env(&tmp);
        let stale = env.artifacts_dir.join("linux_x64/leftover.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        build_target(&env, &StubPipeline::default(), &linux_x64()).unwrap();

        assert!(!stale.exists());
        assert!(env.artifacts_dir.join("linux_x64/lib").exists());
    }

    #[test]
    fn test_artifacts_collected_from_prebuilt_tree() {
        let tmp = TempDir::new().unwrap();
        let env = dry_env(&tmp);
        let build_dir = env.skia_dir.join("out/linux_x64");

        // Fake a completed build.
        fs::create_dir_all(build_dir.join("obj")).unwrap();
        fs::create_dir_all(build_dir.join("gen")).unwrap();
        fs::write(build_dir.join("libskia.a"), "archive").unwrap();
        fs::write(build_dir.join("obj/libextra.a"), "archive").unwrap();
        fs::write(
            build_dir.join("obj/public_headers_warnings_check.ninja"),
            "defines = -DSK_GANESH -DSKIA_VERSION=1 -DNDEBUG\n",
        )
        .unwrap();
        fs::write(build_dir.join("gen/skia.h"), "// umbrella\n#include <core.h>\n").unwrap();

        build_target(&env, &StubPipeline::default(), &linux_x64()).unwrap();

        let out = env.artifacts_dir.join("linux_x64");
        assert!(out.join("lib/libskia.a").exists());
        assert!(out.join("lib/obj/libextra.a").exists());

        let header = fs::read_to_string(out.join("skia.h")).unwrap();
        assert!(header.contains("#define SK_GANESH"));
        assert!(header.contains("#define SKIA_VERSION 1"));
        assert!(!header.contains("NDEBUG"));
    }

    #[test]
    fn test_save_space_removes_build_dir() {
        let tmp = TempDir::new().unwrap();
        let mut env = dry_env(&tmp);
        env.save_space = true;

        build_target(&env, &StubPipeline::default(), &linux_x64()).unwrap();

        assert!(!env.skia_dir.join("out/linux_x64").exists());
    }

    #[test]
    fn test_all_archs_builds_x64_then_arm64() {
        let tmp = TempDir::new().unwrap();
        let env = dry_env(&tmp);
        let stub = StubPipeline::default();

        build_all_archs(&env, &stub, TargetOs::Linux, false, false).unwrap();

        assert!(env.skia_dir.join("out/linux_x64/args.gn").exists());
        assert!(env.skia_dir.join("out/linux_arm64/args.gn").exists());
    }
}
