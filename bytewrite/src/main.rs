use anyhow::{Context, Result};
use bytewrite::config::{CONFIG_FILE, Config, load_config};
use bytewrite::recog::{CharacterBase, Pipeline, PipelineOptions, SampleSource, StageTimings};
use clap::{ArgAction, Parser};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Read a handwritten word from a photo
#[derive(Parser, Debug)]
#[command(name = "bytewrite", version)]
#[command(about = "Recognise a photographed handwritten lowercase word")]
struct Args {
    /// Photo of the word
    image: PathBuf,

    /// Directory of reference samples, one subdirectory per letter
    #[arg(short, long)]
    samples: Option<PathBuf>,

    /// Configuration file (defaults to ./bytewrite.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shrink the photo by this integer factor before processing
    #[arg(short, long)]
    downsample: Option<u32>,

    /// Ink ratio threshold for binarization, between 0 and 1
    #[arg(long)]
    ink_ratio: Option<f64>,

    /// Binarize the colour photo directly, skipping greyscale conversion
    #[arg(long)]
    no_greyscale: bool,

    /// Print how long each stage took
    #[arg(short, long)]
    timings: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Command-line flags take precedence over the configuration file.
    fn pipeline_options(&self, mut options: PipelineOptions) -> PipelineOptions {
        if let Some(factor) = self.downsample {
            options.downsample = factor;
        }
        if let Some(ratio) = self.ink_ratio {
            options.ink_ratio = ratio;
        }
        if self.no_greyscale {
            options.greyscale = false;
        }
        options
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_config(explicit: Option<&Path>) -> Config {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let local = Path::new(CONFIG_FILE);
            if local.is_file() {
                load_config(local)
            } else {
                Config::default()
            }
        }
    }
}

fn print_timings(timings: &StageTimings) {
    for (name, d) in timings.stages() {
        println!("{:<22} {:.2}s", name, d.as_secs_f64());
    }
    println!("{:<22} {:.2}s", "total", timings.total().as_secs_f64());
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = read_config(args.config.as_deref());
    let options = args.pipeline_options(config.pipeline.clone());
    options.validate()?;
    debug!("pipeline options: {:?}", options);

    let samples_dir = args
        .samples
        .clone()
        .or(config.samples)
        .context("no sample directory: pass --samples or set `samples` in the config file")?;

    // samples load while the photo is decoded
    let loader = CharacterBase::load_dir_in_background(samples_dir.clone(), options.clone())?;
    let pix = bytewrite::io::read_image_downsampled(&args.image, options.downsample)
        .with_context(|| format!("reading {}", args.image.display()))?;
    let samples = loader
        .wait()?
        .with_context(|| format!("loading samples from {}", samples_dir.display()))?;
    info!("{} reference samples", samples.count());

    let result = Pipeline::new(options)
        .run(&pix, &samples)
        .with_context(|| format!("recognising {}", args.image.display()))?;

    println!("{}", result.word);
    if args.timings {
        print_timings(&result.timings);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "bytewrite",
            "word.jpg",
            "--downsample",
            "3",
            "--no-greyscale",
            "-vv",
        ])
        .unwrap();
        let options = args.pipeline_options(PipelineOptions {
            ink_ratio: 0.7,
            ..Default::default()
        });
        assert_eq!(options.downsample, 3);
        assert_eq!(options.ink_ratio, 0.7);
        assert!(!options.greyscale);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_image_is_required() {
        assert!(Args::try_parse_from(["bytewrite"]).is_err());
    }
}
