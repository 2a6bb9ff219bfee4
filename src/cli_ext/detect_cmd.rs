use anyhow::Result;

use crate::cli::{AppContext, DetectArgs};
use crate::cli_ext::common::detect_path;

pub fn run(args: DetectArgs, _ctx: &AppContext) -> Result<()> {
    for path in &args.paths {
        match detect_path(path) {
            Some(lang) => println!("{}\t{}", path.display(), lang.as_str()),
            None => println!("{}\t-", path.display()),
        }
    }
    Ok(())
}
