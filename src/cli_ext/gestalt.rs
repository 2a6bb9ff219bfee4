//! A thin, honestly-partial stand-in for a real project-gestalt rule
//! engine (explicitly out of scope): a small table of "this marker file
//! with this shape implies that project kind" rules.

use anyhow::Result;

use crate::cli::{AppContext, GestaltArgs};

struct Rule {
    label: &'static str,
    marker: &'static str,
    also_contains: Option<&'static str>,
}

const RULES: &[Rule] = &[
    Rule {
        label: "cargo workspace",
        marker: "Cargo.toml",
        also_contains: Some("[workspace]"),
    },
    Rule {
        label: "cargo package",
        marker: "Cargo.toml",
        also_contains: None,
    },
    Rule {
        label: "npm package",
        marker: "package.json",
        also_contains: None,
    },
    Rule {
        label: "python project",
        marker: "pyproject.toml",
        also_contains: None,
    },
    Rule {
        label: "go module",
        marker: "go.mod",
        also_contains: None,
    },
];

pub fn run(args: GestaltArgs, ctx: &AppContext) -> Result<()> {
    let mut matches = Vec::new();
    for rule in RULES {
        let marker_path = args.root.join(rule.marker);
        if !marker_path.is_file() {
            continue;
        }
        if let Some(needle) = rule.also_contains {
            let Ok(text) = std::fs::read_to_string(&marker_path) else {
                continue;
            };
            if !text.contains(needle) {
                continue;
            }
        }
        matches.push(rule.label);
    }

    if matches.is_empty() {
        if !ctx.quiet {
            println!("no recognized project gestalt under {}", args.root.display());
        }
        return Ok(());
    }

    for label in matches {
        println!("{label}");
    }
    Ok(())
}
