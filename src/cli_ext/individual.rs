use anyhow::Result;
use tabled::{Table, Tabled};

use crate::cli::{AppContext, IndividualArgs};
use crate::cli_ext::common::{collect_files, detect_path, scan_path_events};

#[derive(Tabled)]
struct Row {
    path: String,
    language: String,
    code: usize,
    comment: usize,
    blank: usize,
}

pub fn run(args: IndividualArgs, ctx: &AppContext) -> Result<()> {
    let files = collect_files(&args.paths, &args.ignore)?;

    let mut rows = Vec::new();
    for path in &files {
        let Some(lang) = detect_path(path) else { continue };
        let Some((_, events)) = scan_path_events(path) else { continue };
        let (mut code, mut comment, mut blank) = (0usize, 0usize, 0usize);
        for event in &events {
            match event.kind {
                crate::scan::entity::LineKind::Code => code += 1,
                crate::scan::entity::LineKind::Comment => comment += 1,
                crate::scan::entity::LineKind::Blank => blank += 1,
            }
        }
        rows.push(Row {
            path: path.display().to_string(),
            language: lang.as_str().to_string(),
            code,
            comment,
            blank,
        });
    }

    if args.json {
        let json: Vec<serde_json::Value> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "path": r.path,
                    "language": r.language,
                    "code": r.code,
                    "comment": r.comment,
                    "blank": r.blank,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if rows.is_empty() {
        if !ctx.quiet {
            println!("no recognized source files found");
        }
        return Ok(());
    }

    println!("{}", Table::new(rows));
    Ok(())
}
