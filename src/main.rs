use anyhow::Result;
use clap::Parser;
use polyloc::cli::{AppContext, Cli, Commands, SummaryArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Some(Commands::Summary(args)) => polyloc::cli_ext::summary::run(args, &ctx),
        Some(Commands::Detect(args)) => polyloc::cli_ext::detect_cmd::run(args, &ctx),
        Some(Commands::Annotate(args)) => polyloc::cli_ext::annotate::run(args, &ctx),
        Some(Commands::Individual(args)) => polyloc::cli_ext::individual::run(args, &ctx),
        Some(Commands::Licenses(args)) => polyloc::cli_ext::licenses::run(args, &ctx),
        Some(Commands::Gestalt(args)) => polyloc::cli_ext::gestalt::run(args, &ctx),
        Some(Commands::RawEntities(args)) => polyloc::cli_ext::raw_entities::run(args, &ctx),
        Some(Commands::Init(args)) => polyloc::infra::config::init(args, &ctx),
        None => polyloc::cli_ext::summary::run(SummaryArgs { paths: cli.paths, ignore: vec![], json: false }, &ctx),
    }
}
