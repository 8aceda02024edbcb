//! `slipway build` command

use anyhow::{bail, Result};

use crate::cli::BuildArgs;
use slipway::ops::build::{build_all_archs, build_target, BuildEnv};
use slipway::profile;
use slipway::{Arch, GnNinjaPipeline, TargetDescriptor, TargetOs};

pub fn execute(args: BuildArgs) -> Result<()> {
    let os = TargetOs::from_alias(&args.os)?;

    if args.plan {
        if args.arch == "all" {
            bail!("--plan needs a concrete architecture, not `all`");
        }
        let arch: Arch = args.arch.parse()?;
        let target = TargetDescriptor::new(os, arch, args.self_contained, args.debug)?;
        let opts = profile::resolve(&target)?;
        println!("{}", serde_json::to_string_pretty(&opts)?);
        return Ok(());
    }

    let env = BuildEnv::new(&args.skia_dir);
    let pipeline = GnNinjaPipeline::new(&env.skia_dir);

    if args.arch == "all" {
        build_all_archs(&env, &pipeline, os, args.self_contained, args.debug)
    } else {
        let arch: Arch = args.arch.parse()?;
        let target = TargetDescriptor::new(os, arch, args.self_contained, args.debug)?;
        build_target(&env, &pipeline, &target)
    }
}
