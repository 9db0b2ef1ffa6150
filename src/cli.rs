//! Command line parsing
//!
//! `--config` is applied first wherever it appears; every other flag
//! overrides the loaded (or default) configuration.

use crate::config::RenderConfig;
use std::path::PathBuf;
use std::str::FromStr;

/// What the binary should do after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Render(CliArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config: RenderConfig,
    /// Write the effective configuration here before rendering
    pub save_config: Option<PathBuf>,
    /// Print progress lines before the final result
    pub verbose: bool,
}

/// Flags that consume the following argument
const VALUE_FLAGS: &[&str] = &[
    "--config",
    "-c",
    "--center",
    "--size",
    "-s",
    "--max-iter",
    "-m",
    "--pixels",
    "--resolution",
    "-r",
    "--escape-radius",
    "-e",
    "--output",
    "-o",
    "--save-config",
];

fn takes_value(flag: &str) -> bool {
    VALUE_FLAGS.contains(&flag)
}

/// Parse a pair like `"-0.5,0.25"`
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (l, r) = s.split_once(separator)?;
    match (T::from_str(l.trim()), T::from_str(r.trim())) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

/// Value following a flag, or an error naming the flag
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_number<T: FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("invalid value for {}: '{}'", flag, value))
}

/// Parse `args` (program name first, as from `std::env::args`)
pub fn parse_args(args: &[String]) -> Result<CliAction, String> {
    // First pass: help and the base config file
    let mut config = RenderConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => return Ok(CliAction::Help),
            "--config" | "-c" => {
                let path = flag_value(args, i, &args[i])?;
                config = RenderConfig::load(path)
                    .map_err(|e| format!("Failed to load config '{}': {}", path, e))?;
                i += 1;
            },
            // Skip the value so it is never read as a flag
            flag if takes_value(flag) => i += 1,
            _ => {},
        }
        i += 1;
    }

    let mut save_config = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" | "-c" => i += 1,
            "--verbose" | "-v" => verbose = true,
            "--center" => {
                let value = flag_value(args, i, flag)?;
                let (x, y) = parse_pair::<f64>(value, ',')
                    .ok_or_else(|| format!("invalid value for --center: '{}' (expected X,Y)", value))?;
                config.view.center_x = x;
                config.view.center_y = y;
                i += 1;
            },
            "--size" | "-s" => {
                config.view.size = parse_number(flag_value(args, i, flag)?, flag)?;
                i += 1;
            },
            "--max-iter" | "-m" => {
                config.max_iterations = parse_number(flag_value(args, i, flag)?, flag)?;
                i += 1;
            },
            "--pixels" | "--resolution" | "-r" => {
                config.pixels_wide = parse_number(flag_value(args, i, flag)?, flag)?;
                i += 1;
            },
            "--escape-radius" | "-e" => {
                config.escape_radius = Some(parse_number(flag_value(args, i, flag)?, flag)?);
                i += 1;
            },
            "--output" | "-o" => {
                config.output = PathBuf::from(flag_value(args, i, flag)?);
                i += 1;
            },
            "--save-config" => {
                save_config = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            },
            other => return Err(format!("unknown argument: '{}'", other)),
        }
        i += 1;
    }

    Ok(CliAction::Render(CliArgs {
        config,
        save_config,
        verbose,
    }))
}

pub fn print_usage() {
    let defaults = RenderConfig::default();
    println!("Usage: graybrot [OPTIONS]");
    println!();
    println!("Renders a grayscale Mandelbrot image.");
    println!();
    println!("Options:");
    println!("  --config FILE, -c FILE      Load settings from a JSON file (flags override it)");
    println!(
        "  --center X,Y                View center (default: {},{})",
        defaults.view.center_x, defaults.view.center_y
    );
    println!(
        "  --size S, -s S              View edge length (default: {})",
        defaults.view.size
    );
    println!(
        "  --max-iter N, -m N          Iteration cap (default: {})",
        defaults.max_iterations
    );
    println!(
        "  --pixels N, -r N            Image edge in pixels (default: {})",
        defaults.pixels_wide
    );
    println!("  --escape-radius R, -e R     Orbit escape bound (default: same as size)");
    println!(
        "  --output PATH, -o PATH      Output image, codec from extension (default: {})",
        defaults.output.display()
    );
    println!("  --save-config FILE          Write the effective settings as JSON");
    println!("  --verbose, -v               Print settings and timing before the result");
    println!("  --help                      Show this help message");
}
