use anyhow::Result;
use clap::Parser;
use foxblogs::build::build_site;
use foxblogs::config::Config;
use std::path::PathBuf;

/// Builds a paginated static blog from a directory of markdown articles.
#[derive(Parser)]
#[command(name = "foxblogs", version)]
struct Cli {
    /// The configuration file. Defaults to the nearest `foxblogs.yaml` in the
    /// working directory or one of its parents.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The number of threads used to parse articles. Defaults to the number
    /// of CPUs.
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_project_file(path, cli.threads)?,
        None => Config::from_directory(&std::env::current_dir()?, cli.threads)?,
    };
    build_site(&config)?;
    Ok(())
}
