//! Implementation of `slipway headers` - public header collection.

use anyhow::Result;
use tracing::{debug, info};

use crate::ops::build::BuildEnv;
use crate::util::fs::copy_matching;

/// The Skia source trees that carry public interface headers.
const HEADER_TREES: &[&str] = &["include", "modules", "src"];

/// Copy every `.h` file from the fixed source trees into
/// `artifacts/headers/<tree>/**`, preserving relative structure.
pub fn copy_headers(env: &BuildEnv) -> Result<()> {
    let headers_dir = env.artifacts_dir.join("headers");
    for tree in HEADER_TREES {
        let src = env.skia_dir.join(tree);
        if !src.exists() {
            debug!("header tree {} not present; skipping", src.display());
            continue;
        }
        copy_matching(&src, &headers_dir.join(tree), ".h")?;
    }
    info!("headers collected in {}", headers_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_copies_header_trees_preserving_structure() {
        let tmp = TempDir::new().unwrap();
        let skia = tmp.path().join("skia");
        fs::create_dir_all(skia.join("include/core")).unwrap();
        fs::create_dir_all(skia.join("modules/skottie")).unwrap();
        fs::create_dir_all(skia.join("src/gpu")).unwrap();
        fs::write(skia.join("include/core/SkCanvas.h"), "").unwrap();
        fs::write(skia.join("modules/skottie/Skottie.h"), "").unwrap();
        fs::write(skia.join("src/gpu/GrContext.h"), "").unwrap();
        fs::write(skia.join("src/gpu/GrContext.cpp"), "").unwrap();

        let env = BuildEnv {
            skia_dir: skia,
            artifacts_dir: tmp.path().join("artifacts"),
            skip_tools: true,
            save_space: false,
        };
        copy_headers(&env).unwrap();

        let headers = env.artifacts_dir.join("headers");
        assert!(headers.join("include/core/SkCanvas.h").exists());
        assert!(headers.join("modules/skottie/Skottie.h").exists());
        assert!(headers.join("src/gpu/GrContext.h").exists());
        assert!(!headers.join("src/gpu/GrContext.cpp").exists());
    }

    #[test]
    fn test_missing_trees_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let skia = tmp.path().join("skia");
        fs::create_dir_all(skia.join("include")).unwrap();
        fs::write(skia.join("include/Sk.h"), "").unwrap();

        let env = BuildEnv {
            skia_dir: skia,
            artifacts_dir: tmp.path().join("artifacts"),
            skip_tools: true,
            save_space: false,
        };
        copy_headers(&env).unwrap();

        assert!(env.artifacts_dir.join("headers/include/Sk.h").exists());
        assert!(!env.artifacts_dir.join("headers/modules").exists());
    }
}
