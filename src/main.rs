//! Home Blueprint CLI
//!
//! Usage:
//!   home-blueprint [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>     Output format: json or svg (default json)
//!   -c, --config <FILE>       Layout configuration file (TOML format)
//!   -s, --stylesheet <FILE>   Stylesheet file for room colors (TOML format)
//!   --lint                    Print blueprint lint warnings to stderr
//!   --summary                 Print the area summary to stderr
//!   --fallback                Output the fallback plan when generation fails
//!   -d, --debug               Verbose logging and annotated SVG output
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use home_blueprint::{
    generate_with_lint, generate_with_lint_or_fallback, render_with_config, AreaSummary, Brief,
    GenerateConfig, LayoutConfig, Stylesheet,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Svg,
}

#[derive(Parser)]
#[command(name = "home-blueprint")]
#[command(about = "Generate residential floor plans from a plot and room program")]
struct Cli {
    /// Brief file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// Layout configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet file for room colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Print blueprint lint warnings to stderr
    #[arg(long)]
    lint: bool,

    /// Print the area summary to stderr
    #[arg(long)]
    summary: bool,

    /// Output the fallback plan instead of failing when generation fails
    #[arg(long)]
    fallback: bool,

    /// Debug mode: verbose logging and room ids in SVG output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.debug);

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let layout = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let brief = match Brief::from_str(&source) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = GenerateConfig::new()
        .with_layout(layout)
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug)
        .with_lint(cli.lint);

    let (blueprint, warnings) = if cli.fallback {
        let (blueprint, warnings, error) =
            generate_with_lint_or_fallback(&brief.plot, &brief.requirements, &config);
        if let Some(e) = error {
            eprintln!("Warning: {}; using fallback plan (not linted)", e);
        }
        (blueprint, warnings)
    } else {
        match generate_with_lint(&brief.plot, &brief.requirements, &config) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    if cli.summary {
        let summary = AreaSummary::from_blueprint(&blueprint, &brief.plot, &config.layout);
        eprintln!("total area:    {:.1} sq ft", summary.total_area);
        eprintln!("built-up area: {:.1} sq ft", summary.built_up_area);
        eprintln!("carpet area:   {:.1} sq ft", summary.carpet_area);
        eprintln!("open area:     {:.1} sq ft", summary.open_area);
    }

    match cli.format {
        Format::Svg => println!("{}", render_with_config(&blueprint, &config)),
        Format::Json => match serde_json::to_string_pretty(&blueprint) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing blueprint: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("home_blueprint={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_intro() {
    println!(
        r#"Home Blueprint - floor plans from a plot and a room program

USAGE:
    home-blueprint [OPTIONS] [FILE]
    cat brief.toml | home-blueprint --format svg

OPTIONS:
    -f, --format       Output format: json (default) or svg
    -c, --config       Layout configuration (TOML file)
    -s, --stylesheet   Custom room colors (TOML file)
    --lint             Report overlaps, containment and door/window defects
    --summary          Print total, built-up, carpet and open area
    --fallback         Output a minimal plan instead of failing (not linted)
    -d, --debug        Verbose logging and room ids in SVG output
    -h, --help         Print help

BRIEF:
    [plot]
    width = 40
    length = 60

    [requirements]
    bedrooms = 3
    bathrooms = 2
    living_room = true
    dining_room = true

Sample briefs live in the briefs/ directory."#
    );
}
