//! Windows profile: clang-cl against the static CRT, Direct3D enabled.

use anyhow::Result;

use crate::core::options::OptionSet;
use crate::core::target::TargetDescriptor;

pub(super) fn apply(target: &TargetDescriptor, opts: &mut OptionSet) -> Result<()> {
    opts.set("skia_use_vulkan", true);
    opts.set("target_os", target.os.gn_name());
    opts.set("target_cpu", target.arch.as_str());
    opts.set("clang_win", "C:/Program Files/LLVM");
    opts.set("skia_enable_fontmgr_win_gdi", false);
    opts.set("skia_use_dng_sdk", true);
    opts.set("skia_use_icu", false);
    opts.set("skia_use_piex", true);
    opts.set("skia_use_sfntly", false);
    opts.set("skia_use_system_expat", false);
    opts.set("skia_use_system_libjpeg_turbo", false);
    opts.set("skia_use_system_libpng", false);
    opts.set("skia_use_system_libwebp", false);
    opts.set("skia_use_system_zlib", false);
    opts.set("skia_use_direct3d", true);

    // Static CRT; the debug variant must match is_debug or the CRTs clash
    // at link time.
    let mt_flag = if target.debug { "/MTd" } else { "/MT" };
    opts.extend_list(
        "extra_cflags",
        [mt_flag, "/EHsc", "/Z7", "/guard:cf", "-D_HAS_AUTO_PTR_ETC=1"],
    )?;
    opts.extend_list(
        "extra_ldflags",
        ["/DEBUG:FULL", "/DEBUGTYPE:CV,FIXUP", "/guard:cf"],
    )?;
    Ok(())
}
