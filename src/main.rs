// src/main.rs

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use function_plot::constants::{DEFAULT_CONFIG_FILE, DEFAULT_PLOT_FILE, DEFAULT_RESULTS_FILE};
use function_plot::{
    generate_series, ConfigResolver, FunctionPlotError, FunctionPlotter, ResultsWriter,
};

/// Samples y = a(e^(2bx+c) + 1)/(e^(2bx+c) - 1) over [xmin, xmax], writes the
/// (x, y) pairs and renders a plot.
#[derive(Parser, Debug)]
#[command(name = "function_plot", version, about, long_about = None)]
struct Args {
    /// Exactly six numbers: xmin step xmax a b c. Any other count reads the config file instead.
    /// Options go before PARAMS; every token from the first value on is taken verbatim.
    #[arg(
        value_name = "PARAMS",
        allow_negative_numbers = true,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    params: Vec<String>,

    /// Directory that relative file names are resolved against [default: directory of the executable]
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// YAML file with keys xmin, step, xmax, a, b, c
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Results file, one "x y" line per sample
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    output: PathBuf,

    /// Rendered plot image (PNG)
    #[arg(long, default_value = DEFAULT_PLOT_FILE)]
    plot_output: PathBuf,

    /// Skip rendering the plot
    #[arg(long)]
    no_plot: bool,
}

/// Directory of the running executable, or the working directory if that
/// cannot be determined.
fn default_base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(args: Args) -> Result<(), FunctionPlotError> {
    let base_dir = args.base_dir.unwrap_or_else(default_base_dir);
    log::debug!("Base directory: '{}'", base_dir.display());

    // --- Parameter Resolution ---
    let resolver = ConfigResolver::new(&base_dir).with_config_file(&args.config);
    let (params, source) = resolver.resolve(args.params.as_slice())?;
    log::info!("Parameters from {source}: {:?}", params.to_ordered());

    // --- Series Generation ---
    log::info!("--- Generating Series ---");
    let series = generate_series(&params)?;
    log::info!("  Generated {} samples.", series.len());
    if series.is_empty() {
        log::warn!(
            "  Domain is empty (xmin {} > xmax {}); writing an empty results file.",
            params.xmin,
            params.xmax
        );
    }

    // --- Results ---
    log::info!("--- Writing Results ---");
    ResultsWriter::new(&base_dir)
        .with_file_name(&args.output)
        .write(&series)?;

    // --- Plot ---
    if args.no_plot {
        log::info!("Skipping plot (--no-plot).");
    } else {
        log::info!("--- Generating Function Plot ---");
        FunctionPlotter::new(&base_dir, &args.plot_output).plot(&series, &params.coefficients)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
