//! SiteImages CLI - regenerates the site artwork
//!
//! Commands: generate (default), templates, verify
//! Returns non-zero on failure, 2 on validation failure

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use siteimages_core::{
    print, GenerationPipeline, Manifest, PipelineError, RunEvent, Scene, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser)]
#[command(name = "siteimages-cli")]
#[command(about = "SiteImages CLI - procedural hero and location-card artwork")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory for the generated images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, global = true)]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every image (the default)
    Generate {
        /// Also write manifest.json with hashes of every file
        #[arg(long)]
        manifest: bool,
    },

    /// List the image templates as JSON
    Templates,

    /// Validate previously generated images
    Verify,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let pipeline = GenerationPipeline::bristol();

    match cli.command.unwrap_or(Commands::Generate { manifest: false }) {
        Commands::Generate { manifest } => match generate(&pipeline, &cli.output_dir, manifest) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e @ PipelineError::ValidationFailed(..)) => {
                eprintln!("error: {}", e);
                ExitCode::from(2)
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Templates => {
            let templates: Vec<_> = pipeline
                .templates()
                .iter()
                .map(|t| serde_json::json!({
                    "id": t.id,
                    "filename": t.filename,
                    "size": t.size,
                    "seed": t.seed,
                }))
                .collect();
            match serde_json::to_string_pretty(&templates) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Verify => {
            let results = match pipeline.verify(&cli.output_dir) {
                Ok(results) => results,
                Err(e) => {
                    println!("{}", serde_json::json!({ "valid": false, "error": e.to_string() }));
                    return ExitCode::FAILURE;
                }
            };
            let valid = results.iter().all(|r| r.valid);
            let output = serde_json::json!({ "valid": valid, "results": results });
            println!("{:#}", output);
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
    }
}

fn generate(pipeline: &GenerationPipeline, out_dir: &Path, manifest: bool) -> Result<(), PipelineError> {
    println!("{}", print::HERO_HEADER);
    let mut cards_announced = false;
    let files = pipeline.run(out_dir, |event| match event {
        RunEvent::Starting(template) => {
            if matches!(template.scene, Scene::Card(_)) && !cards_announced {
                println!("{}", print::CARD_HEADER);
                cards_announced = true;
            }
        }
        RunEvent::Written(file) => println!("{}", print::created_line(file)),
    })?;

    println!("\n{}", print::DONE_HEADER);
    for line in print::summary_lines(&files) {
        println!("{}", line);
    }

    if manifest {
        let path = Manifest::build(files)?.write(out_dir)?;
        println!("  Manifest: {}", path.display());
    }
    Ok(())
}
