//! macOS profile: Metal backend, vendored codec libraries.

use anyhow::Result;

use crate::core::options::OptionSet;
use crate::core::target::TargetDescriptor;

pub(super) fn apply(target: &TargetDescriptor, opts: &mut OptionSet) -> Result<()> {
    opts.set("skia_use_vulkan", false);
    opts.set("skia_use_metal", true);
    opts.set("target_os", target.os.gn_name());
    opts.set("target_cpu", target.arch.as_str());
    opts.set("skia_use_icu", false);
    opts.set("skia_use_piex", true);
    // Always vendor these regardless of self_contained; Homebrew layouts
    // are too inconsistent to link against.
    opts.set("skia_use_system_expat", false);
    opts.set("skia_use_system_libjpeg_turbo", false);
    opts.set("skia_use_system_libpng", false);
    opts.set("skia_use_system_libwebp", false);
    opts.set("skia_use_system_zlib", false);

    opts.extend_list(
        "extra_cflags",
        ["-DSKIA_C_DLL", "-DHAVE_ARC4RANDOM_BUF", "-stdlib=libc++"],
    )?;
    opts.extend_list("extra_ldflags", ["-stdlib=libc++"])?;
    Ok(())
}
