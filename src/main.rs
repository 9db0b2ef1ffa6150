mod cli;
mod config;
mod fractal;
mod raster;
mod sink;

use cli::CliAction;
use config::RenderConfig;
use fractal::render_grayscale;
use raster::GrayBuffer;
use sink::{resolve_output_path, FileSink, ImageSink};
use std::env;
use std::process::ExitCode;
use std::time::Instant;

const SUCCESS_MESSAGE: &str = "Success!";
const FAILURE_MESSAGE: &str = "Failed to write out file";

/// Exit code for bad arguments or an invalid configuration
const EXIT_CONFIG_ERROR: u8 = 2;

/// Hand a rendered buffer to a sink
fn write_image(sink: &mut dyn ImageSink, buffer: &GrayBuffer) -> Result<(), String> {
    sink.write(
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        buffer.channels(),
    )
}

/// Line printed to stdout once the sink has finished
fn outcome_message(result: &Result<(), String>) -> &'static str {
    if result.is_ok() {
        SUCCESS_MESSAGE
    } else {
        FAILURE_MESSAGE
    }
}

fn print_summary(config: &RenderConfig) {
    println!("=== graybrot ===");
    println!(
        "View: center ({}, {}), size {}",
        config.view.center_x, config.view.center_y, config.view.size
    );
    println!(
        "Resolution: {}x{}, max iterations: {}, escape bound: {}",
        config.pixels_wide,
        config.pixels_wide,
        config.max_iterations,
        config.escape_bound()
    );
    if config.max_iterations > u8::MAX as u32 {
        println!(
            "Note: more than {} iterations, escape counts saturate at white",
            u8::MAX
        );
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let cli = match cli::parse_args(&args) {
        Ok(CliAction::Help) => {
            cli::print_usage();
            return ExitCode::SUCCESS;
        },
        Ok(CliAction::Render(cli)) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Use --help for command line options.");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        },
    };
    let config = &cli.config;

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    if let Some(path) = &cli.save_config {
        if let Err(e) = config.save(path) {
            eprintln!("Failed to save config: {}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
        if cli.verbose {
            println!("Config saved to {}", path.display());
        }
    }

    if cli.verbose {
        print_summary(config);
    }

    let start = Instant::now();
    let buffer = render_grayscale(config);
    if cli.verbose {
        println!(
            "Rendered {} pixels in {:.1} ms",
            buffer.as_bytes().len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let result = resolve_output_path(&config.output).and_then(|path| {
        if cli.verbose {
            println!("Writing {}", path.display());
        }
        write_image(&mut FileSink::new(path), &buffer)
    });

    if let Err(e) = &result {
        eprintln!("{}", e);
    }
    println!("{}", outcome_message(&result));

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal::ViewWindow;
    use tempdir::TempDir;

    /// Keeps whatever it is given
    #[derive(Default)]
    struct RecordingSink {
        written: Option<(Vec<u8>, u32, u32, u8)>,
    }

    impl ImageSink for RecordingSink {
        fn write(
            &mut self,
            samples: &[u8],
            width: u32,
            height: u32,
            channels: u8,
        ) -> Result<(), String> {
            self.written = Some((samples.to_vec(), width, height, channels));
            Ok(())
        }
    }

    struct FailingSink;

    impl ImageSink for FailingSink {
        fn write(&mut self, _: &[u8], _: u32, _: u32, _: u8) -> Result<(), String> {
            Err("disk full".to_string())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            pixels_wide: 4,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_sink_receives_whole_buffer() {
        let buffer = render_grayscale(&small_config());
        let mut sink = RecordingSink::default();
        write_image(&mut sink, &buffer).unwrap();

        let (samples, width, height, channels) = sink.written.unwrap();
        assert_eq!(samples.len(), 16);
        assert_eq!((width, height, channels), (4, 4, 1));
        assert_eq!(samples, buffer.into_raw());
    }

    #[test]
    fn test_outcome_messages() {
        let buffer = render_grayscale(&small_config());

        let ok = write_image(&mut RecordingSink::default(), &buffer);
        assert_eq!(outcome_message(&ok), "Success!");

        let failed = write_image(&mut FailingSink, &buffer);
        assert_eq!(outcome_message(&failed), "Failed to write out file");
    }

    #[test]
    fn test_render_to_file() {
        let dir = TempDir::new("graybrot_main").unwrap();
        let config = RenderConfig {
            view: ViewWindow::default(),
            pixels_wide: 32,
            output: dir.path().join("mandelbrot.png"),
            ..RenderConfig::default()
        };
        config.validate().unwrap();

        let buffer = render_grayscale(&config);
        let path = resolve_output_path(&config.output).unwrap();
        write_image(&mut FileSink::new(&path), &buffer).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.into_raw(), buffer.into_raw());
    }
}
