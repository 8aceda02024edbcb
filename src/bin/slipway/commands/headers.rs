//! `slipway headers` command

use anyhow::Result;

use crate::cli::HeadersArgs;
use slipway::ops::build::BuildEnv;
use slipway::ops::headers::copy_headers;

pub fn execute(args: HeadersArgs) -> Result<()> {
    let env = BuildEnv::new(&args.skia_dir);
    copy_headers(&env)
}
