use anyhow::{Context, Result};

use crate::cli::{AppContext, AnnotateArgs};
use crate::cli_ext::common::scan_path_events;
use crate::scan::entity::LineKind;

fn letter(kind: LineKind) -> char {
    match kind {
        LineKind::Code => 'C',
        LineKind::Comment => 'M',
        LineKind::Blank => 'B',
    }
}

pub fn run(args: AnnotateArgs, _ctx: &AppContext) -> Result<()> {
    let bytes =
        std::fs::read(&args.path).with_context(|| format!("failed to read {}", args.path.display()))?;
    let Some((_, events)) = scan_path_events(&args.path) else {
        anyhow::bail!("{}: unrecognized or binary file", args.path.display());
    };

    for (i, event) in events.iter().enumerate() {
        let raw = &bytes[event.range.clone()];
        let text = String::from_utf8_lossy(raw);
        let text = text.strip_suffix('\n').unwrap_or(&text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        if args.no_line_numbers {
            println!("{} {}", letter(event.kind), text);
        } else {
            println!("{:>5} {} {}", i + 1, letter(event.kind), text);
        }
    }
    Ok(())
}
