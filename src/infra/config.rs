use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::{AppContext, InitArgs};

/// User-overridable knobs, layered from `polyloc.toml` / `.polyloc.toml`
/// and `POLYLOC_`-prefixed environment variables.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Extra ignore globs, added on top of `.gitignore`
    pub ignore_patterns: Vec<String>,

    /// Default settings for `ploc summary`
    pub summary: SummaryConfig,

    /// Default settings for `ploc annotate`
    pub annotate: AnnotateConfig,

    /// Language-table overrides: extension (no leading dot, e.g. `"m"`) ->
    /// forced language id, bypassing the detection pipeline entirely for
    /// that suffix. Consulted by `cli_ext::common::detect_path`.
    pub language_overrides: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub sort_by: String,
    pub show_files: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateConfig {
    pub show_line_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_patterns: vec![
                "target/".to_string(),
                "node_modules/".to_string(),
                "dist/".to_string(),
                "build/".to_string(),
                ".git/".to_string(),
                "*.pyc".to_string(),
                "__pycache__/".to_string(),
                ".DS_Store".to_string(),
                "Thumbs.db".to_string(),
            ],
            summary: SummaryConfig {
                sort_by: "code".to_string(),
                show_files: true,
            },
            annotate: AnnotateConfig {
                show_line_numbers: true,
            },
            language_overrides: std::collections::BTreeMap::new(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let defaults = config::Config::try_from(&Config::default())
        .context("Failed to seed configuration defaults")?;
    let mut builder = config::Config::builder().add_source(defaults);

    let config_paths = ["polyloc.toml", "polyloc.yaml", "polyloc.json", ".polyloc.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    builder = builder.add_source(config::Environment::with_prefix("POLYLOC").separator("_"));

    let cfg = builder.build().context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

/// Process-wide cached config, loaded from `polyloc.toml`/env on first use.
/// A malformed or unreadable config degrades to `Config::default()` with a
/// warning rather than aborting the run, matching this crate's general
/// "skip and log" error posture.
pub fn current() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        load_config().unwrap_or_else(|err| {
            warn!(error = %err, "failed to load polyloc config, using defaults");
            Config::default()
        })
    })
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("polyloc.toml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
