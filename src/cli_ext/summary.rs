use anyhow::Result;
use owo_colors::OwoColorize;
use rayon::prelude::*;
use tabled::{Table, Tabled};

use crate::aggregate::Summary;
use crate::cli::{AppContext, SummaryArgs};
use crate::cli_ext::common::{collect_files, scan_path_into};
use crate::scan::entity::{EventSink, VecSink};

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "language")]
    language: String,
    files: usize,
    code: usize,
    comment: usize,
    blank: usize,
}

pub fn run(args: SummaryArgs, ctx: &AppContext) -> Result<()> {
    let files = collect_files(&args.paths, &args.ignore)?;

    if ctx.dry_run {
        for file in &files {
            println!("{}", file.display());
        }
        return Ok(());
    }

    let partials: Vec<Summary> = files
        .par_iter()
        .map(|path| {
            let mut sink = VecSink::default();
            let mut summary = Summary::new();
            if let Some(lang) = scan_path_into(path, &mut sink) {
                summary.record_file(lang);
                for event in sink.lines {
                    summary.line_event(event);
                }
            }
            summary
        })
        .collect();

    let mut summary = Summary::new();
    for partial in partials {
        summary.merge(partial);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_rows(&summary))?);
        return Ok(());
    }

    let rows: Vec<Row> = summary
        .by_language
        .iter()
        .map(|(lang, totals)| Row {
            language: lang.as_str().to_string(),
            files: totals.files,
            code: totals.code,
            comment: totals.comment,
            blank: totals.blank,
        })
        .collect();

    if rows.is_empty() {
        if !ctx.quiet {
            println!("{}", "no recognized source files found".yellow());
        }
        return Ok(());
    }

    println!("{}", Table::new(rows));
    if !ctx.quiet {
        let total = summary.grand_total();
        println!(
            "total: {} files, {} code, {} comment, {} blank",
            total.files, total.code, total.comment, total.blank
        );
    }
    Ok(())
}

fn json_rows(summary: &Summary) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = summary
        .by_language
        .iter()
        .map(|(lang, totals)| {
            serde_json::json!({
                "language": lang.as_str(),
                "files": totals.files,
                "code": totals.code,
                "comment": totals.comment,
                "blank": totals.blank,
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}
