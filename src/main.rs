use clap::{Parser, Subcommand};
use fillcrop::{config, output, process};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fillcrop")]
#[command(about = "Batch resize and center-crop images to a fixed resolution")]
#[command(long_about = "\
Batch resize and center-crop images to a fixed resolution

Every .png/.jpg/.jpeg/.bmp/.gif file directly inside the input folder is
scaled (keeping its aspect ratio) until it covers the target box, then
cropped around the center to exactly WIDTH x HEIGHT. Results are written to
the output folder under the same file name, overwriting existing files.

Files that fail to decode or encode are reported and skipped; the rest of the
batch still runs.

Settings are read from --config FILE, or ./fillcrop.toml when present, and
flags override them. Run 'fillcrop gen-config' for a documented example.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./fillcrop.toml if it exists)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Input folder [default: input]
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output folder [default: output]
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Target width in pixels [default: 2200]
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Target height in pixels [default: 2200]
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resize and crop every image (the default)
    Run,
    /// Print the resize and crop plan for each image without writing anything
    Check,
    /// Print a stock fillcrop.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.as_ref().unwrap_or(&Command::Run) {
        Command::Run => {
            let batch = load_batch_config(&cli)?;
            let summary = process::process(&batch, |event| output::print_process_event(&event))?;
            output::print_summary(&summary);
        }
        Command::Check => {
            let batch = load_batch_config(&cli)?;
            println!(
                "==> Checking {} (target {}x{})",
                batch.input_folder.display(),
                batch.target_width,
                batch.target_height
            );
            let plan = process::plan(&batch)?;
            output::print_plan(&plan);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Layer the config file and CLI flags over the stock defaults.
fn load_batch_config(cli: &Cli) -> Result<config::BatchConfig, Box<dyn std::error::Error>> {
    let overrides = config::ConfigOverrides {
        input_folder: cli.input.clone(),
        output_folder: cli.output.clone(),
        target_width: cli.width,
        target_height: cli.height,
    };
    let cwd = std::env::current_dir()?;
    Ok(config::load_config(cli.config.as_deref(), &cwd, &overrides)?)
}

/// Route `tracing` diagnostics to stderr.
///
/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
