// horde-model-paths: print the resolved model reference cache layout.
// Creates the cache folders unless told not to.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use horde_model_reference::cache::{self, CACHE_HOME_ENV};
use horde_model_reference::{PathConfig, ResolveOptions, Result};

/// Show where AI Horde model reference files are cached and fetched from
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache home; the cache root is <DIR>/horde_model_reference
    #[arg(long, value_name = "DIR", env = CACHE_HOME_ENV)]
    cache_home: Option<PathBuf>,

    /// Resolve paths without creating any directories
    #[arg(long)]
    no_create: bool,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut options = ResolveOptions::default();
    if let Some(cache_home) = &args.cache_home {
        options = options.with_cache_home(cache_home);
    }

    let config: PathConfig = if args.no_create {
        PathConfig::resolve(&options)?
    } else {
        PathConfig::init(&options)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.report())?);
        return Ok(());
    }

    let cached = cache::cached_categories(&config);
    let report = config.report();
    println!("Base path:  {}", report.base_path.display());
    println!("Logs:       {}", report.log_folder.display());
    println!("Legacy:     {}", report.legacy_folder.display());
    println!("Showcase:   {}", report.showcase_folder.display());
    println!("Remote:     {}", report.repo_url);
    println!();
    for (entry, (category, _)) in report.categories.iter().zip(config.filenames()) {
        let marker = if cached.contains(&category) { "*" } else { " " };
        println!("{} {:<18} {}", marker, entry.category, entry.path.display());
        println!("  {:<18} {}", "", entry.url);
    }

    Ok(())
}
