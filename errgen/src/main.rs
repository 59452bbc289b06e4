use clap::Parser;
use errgen::config::{ProjectConfig, DEFAULT_CONFIG_FILE};
use errgen::pipeline::Generator;
use errgen::{load_registry, log_error, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate Rust error constants and Markdown reference docs from an error registry
#[derive(Debug, Parser)]
#[command(name = "errgen", version, about)]
struct Cli {
    /// Registry files (.toml/.json) or directories containing them
    inputs: Vec<PathBuf>,

    /// Project config file [default: errgen.toml when present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the generated Rust module
    #[arg(short, long, value_name = "FILE")]
    source_out: Option<PathBuf>,

    /// Output directory for per-domain Markdown documents
    #[arg(short, long, value_name = "DIR")]
    markdown_dir: Option<PathBuf>,

    /// Verify generated files are up to date instead of writing them
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = logging::init_logging(level) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ProjectConfig::load(path)?,
        None => ProjectConfig::load_or_default(&PathBuf::from(DEFAULT_CONFIG_FILE))?,
    };

    // CLI flags override the config file
    let inputs = if cli.inputs.is_empty() {
        config.inputs
    } else {
        cli.inputs
    };
    let source_out = cli.source_out.or(config.source_output).unwrap_or_default();
    let markdown_dir = cli.markdown_dir.or(config.markdown_dir).unwrap_or_default();

    let registry = load_registry(&inputs).map_err(|e| {
        log_error!(e.error_code(), "Failed to load registry", "error" => e);
        e
    })?;

    let generator = Generator::new(config.preferences);

    if cli.check {
        let stale = generator.verify(&source_out, &markdown_dir, &registry)?;
        if stale.is_empty() {
            println!("All generated files are up to date");
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("Generated files are out of date:");
        for path in &stale {
            eprintln!("  {}", path.display());
        }
        return Ok(ExitCode::FAILURE);
    }

    let report = generator
        .generate(&source_out, &markdown_dir, &registry)
        .map_err(|e| {
            log_error!(e.error_code(), "Generation failed", "error" => e);
            e
        })?;

    println!(
        "Generated {} error definitions across {} domains",
        report.definitions,
        report.domains()
    );
    println!("  source:   {}", report.source_path.display());
    for (domain, path) in &report.markdown_files {
        println!("  {:<9} {}", format!("{}:", domain), path.display());
    }

    Ok(ExitCode::SUCCESS)
}
