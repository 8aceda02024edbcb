//! Linux profile: clang cross-toolchain against a per-triple sysroot.

use anyhow::Result;

use crate::core::options::OptionSet;
use crate::core::target::TargetDescriptor;

pub(super) fn apply(target: &TargetDescriptor, opts: &mut OptionSet) -> Result<()> {
    let llvm_target = format!("{}-linux-gnu", target.arch.llvm_name());
    let sysroot = format!("--sysroot=/sysroots/{}", llvm_target);
    let triple = format!("--target={}", llvm_target);

    opts.set("skia_use_vulkan", true);
    opts.set("skia_use_x11", false);
    opts.set("skia_use_system_freetype2", !target.self_contained);
    opts.set("cc", "clang");
    opts.set("cxx", "clang++");
    opts.set("target_os", target.os.gn_name());
    opts.set("target_cpu", target.arch.as_str());
    opts.set("skia_use_icu", false);
    opts.set("skia_use_piex", true);
    opts.set("skia_use_sfntly", false);
    // expat and zlib have stable ABIs; candidates for system linkage later
    opts.set("skia_use_system_expat", false);
    opts.set("skia_use_system_libjpeg_turbo", false);
    opts.set("skia_use_system_libpng", false);
    opts.set("skia_use_system_libwebp", false);
    opts.set("skia_use_system_zlib", false);

    opts.extend_list("extra_cflags", [triple.clone(), sysroot.clone()])?;
    opts.extend_list("extra_cflags_cc", ["-stdlib=libc++"])?;
    // Order matters: clang honors the last -rtlib, and the libc++/unwind
    // group must come after the target/sysroot selection.
    opts.extend_list(
        "extra_ldflags",
        [
            triple,
            sysroot,
            "-rtlib=compiler-rt".to_string(),
            "-stdlib=libc++".to_string(),
            "-rtlib=compiler-rt".to_string(),
            "-fuse-ld=lld".to_string(),
            "-lc++".to_string(),
            "-lc++abi".to_string(),
            "-lunwind".to_string(),
            "-lm".to_string(),
            "-lc".to_string(),
        ],
    )?;
    Ok(())
}
