use anyhow::{Context, Result};

use crate::cli::{AppContext, RawEntitiesArgs};
use crate::cli_ext::common::detect_path;
use crate::infra::io::read_file_smart;
use crate::scan::entity::VecSink;
use crate::scan::registry::scanner_for;

pub fn run(args: RawEntitiesArgs, _ctx: &AppContext) -> Result<()> {
    let Some(lang) = detect_path(&args.path) else {
        anyhow::bail!("{}: unrecognized or binary file", args.path.display());
    };
    let Some(scanner) = scanner_for(lang) else {
        anyhow::bail!("{}: detected as {} but no scanner is registered", args.path.display(), lang.as_str());
    };
    let content =
        read_file_smart(&args.path).with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut sink = VecSink::default();
    scanner.entities(content.as_bytes(), &mut sink);

    for span in &sink.entities {
        println!("{:?}\t{}\t{}", span.kind, span.range.start, span.range.end);
    }
    Ok(())
}
