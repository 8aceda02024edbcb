//! Platform profile resolution.
//!
//! Maps a [`TargetDescriptor`] to the complete GN option set for that
//! platform: shared base defaults first, then one per-OS branch that
//! overlays feature toggles and appends toolchain flags.

mod linux;
mod macos;
mod windows;

use anyhow::Result;

use crate::core::options::{GnValue, OptionSet};
use crate::core::target::{TargetDescriptor, TargetError, TargetOs};

/// Base defaults shared by every platform.
///
/// List-valued keys start here as empty placeholders (except the baseline
/// compile flags) so per-OS branches can append without replacing.
fn base_defaults(debug: bool) -> OptionSet {
    let mut opts = OptionSet::new();
    opts.set("is_debug", debug);
    opts.set("is_official_build", !debug);
    opts.set("extra_asmflags", GnValue::List(vec![]));
    opts.set("skia_enable_tools", false);
    opts.set(
        "extra_cflags",
        GnValue::List(vec![
            "-ffunction-sections".to_string(),
            "-fdata-sections".to_string(),
            "-fno-rtti".to_string(),
        ]),
    );
    opts.set("extra_cflags_c", GnValue::List(vec![]));
    opts.set("extra_cflags_cc", GnValue::List(vec![]));
    opts.set("extra_ldflags", GnValue::List(vec![]));
    opts.set("skia_enable_skottie", true);
    opts.set("skia_use_harfbuzz", false);
    opts
}

/// Resolve the full option set for one target.
///
/// Rejects unsupported (os, arch) pairs before building anything; performs
/// no filesystem access.
pub fn resolve(target: &TargetDescriptor) -> Result<OptionSet> {
    if !target.os.supports(target.arch) {
        return Err(TargetError::UnsupportedArch {
            arch: target.arch,
            os: target.os,
        }
        .into());
    }

    let mut opts = base_defaults(target.debug);
    match target.os {
        TargetOs::Linux => linux::apply(target, &mut opts)?,
        TargetOs::Macos => macos::apply(target, &mut opts)?,
        TargetOs::Windows => windows::apply(target, &mut opts)?,
    }
    Ok(opts)
}
