//! A thin, honestly-partial stand-in for a real license-sniffing engine
//! (explicitly out of scope): a handful of SPDX texts matched against
//! `LICENSE*` files by regex.

use anyhow::Result;
use regex::RegexBuilder;

use crate::cli::{AppContext, LicensesArgs};

struct LicenseRule {
    spdx: &'static str,
    marker: &'static str,
}

const RULES: &[LicenseRule] = &[
    LicenseRule {
        spdx: "MIT",
        marker: r"Permission is hereby granted, free of charge",
    },
    LicenseRule {
        spdx: "Apache-2.0",
        marker: r"Apache License,?\s*Version 2\.0",
    },
    LicenseRule {
        spdx: "BSD-3-Clause",
        marker: r"Redistributions? of source code must retain",
    },
    LicenseRule {
        spdx: "GPL-3.0",
        marker: r"GNU GENERAL PUBLIC LICENSE\s*Version 3",
    },
];

fn is_license_filename(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    upper.starts_with("LICENSE") || upper.starts_with("LICENCE") || upper.starts_with("COPYING")
}

pub fn run(args: LicensesArgs, ctx: &AppContext) -> Result<()> {
    let walker = crate::infra::walk::FileWalker::new(&[])?;
    let files = walker.walk_files(&args.root);

    let mut found_any = false;
    for path in &files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_license_filename(name) {
            continue;
        }
        let Ok(text) = std::fs::read_to_string(path) else {
            continue;
        };

        let matched = RULES.iter().find(|rule| {
            RegexBuilder::new(rule.marker)
                .case_insensitive(true)
                .build()
                .map(|re| re.is_match(&text))
                .unwrap_or(false)
        });

        found_any = true;
        match matched {
            Some(rule) => println!("{}\t{}", path.display(), rule.spdx),
            None => println!("{}\tunrecognized", path.display()),
        }
    }

    if !found_any && !ctx.quiet {
        println!("no LICENSE* files found under {}", args.root.display());
    }
    Ok(())
}
