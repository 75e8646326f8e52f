//! BrandForge CLI - Bridge interface for the course platform
//!
//! Commands: generate, theme, themes, inspect
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 on validation failure

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brandforge_core::{
    decode_data_uri,
    pipeline::{BrandingPipeline, BrandingRequest, PipelineError},
    themes::{select_entry, CATALOG, DEFAULT_THEME},
};

#[derive(Parser)]
#[command(name = "brandforge-cli")]
#[command(about = "BrandForge CLI - Deterministic course branding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate logo and banner for a course
    Generate {
        /// Course title
        #[arg(short, long)]
        title: String,

        /// Course description
        #[arg(short, long)]
        description: Option<String>,

        /// Also write logo.svg, banner.svg and manifest.json here
        #[arg(short, long, env = "BRANDFORGE_OUT_DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Show the theme a course resolves to
    Theme {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// List the theme catalog in match order
    Themes,

    /// Decode a data URI back to SVG markup
    Inspect {
        #[arg(long)]
        data_uri: String,
    },
}

fn print_json(value: &serde_json::Value, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match text {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!(r#"{{"error": "Failed to serialize output: {}"}}"#, e),
    }
}

fn failure(error: &PipelineError, pretty: bool) -> ExitCode {
    print_json(
        &serde_json::json!({
            "success": false,
            "error": error.to_string(),
        }),
        pretty,
    );
    match error {
        PipelineError::ValidationFailed(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;

    match cli.command {
        Commands::Generate { title, description, out_dir } => {
            let request = BrandingRequest::new(title, description);
            let compiled = match BrandingPipeline::new().compile(&request) {
                Ok(c) => c,
                Err(e) => return failure(&e, pretty),
            };

            if let Some(dir) = out_dir {
                match compiled.write_to_dir(&dir) {
                    Ok(files) => info!(count = files.len(), dir = %dir.display(), "exports written"),
                    Err(e) => return failure(&e, pretty),
                }
            }

            print_json(
                &serde_json::json!({
                    "success": true,
                    "logo_url": compiled.result.logo_url,
                    "banner_url": compiled.result.banner_url,
                    "manifest": compiled.manifest,
                }),
                pretty,
            );
            ExitCode::SUCCESS
        }

        Commands::Theme { title, description } => {
            let entry = select_entry(&title, description.as_deref().unwrap_or(""));
            print_json(
                &serde_json::json!({
                    "keyword": entry.map(|e| e.keyword).unwrap_or("default"),
                    "theme": entry.map(|e| e.theme).unwrap_or(DEFAULT_THEME),
                }),
                pretty,
            );
            ExitCode::SUCCESS
        }

        Commands::Themes => {
            let catalog: Vec<_> = CATALOG
                .iter()
                .enumerate()
                .map(|(i, e)| serde_json::json!({
                    "order": i + 1,
                    "keyword": e.keyword,
                    "theme": e.theme,
                }))
                .collect();
            print_json(&serde_json::Value::Array(catalog), pretty);
            ExitCode::SUCCESS
        }

        Commands::Inspect { data_uri } => match decode_data_uri(&data_uri) {
            Ok(markup) => {
                println!("{}", markup);
                ExitCode::SUCCESS
            }
            Err(e) => failure(&PipelineError::from(e), pretty),
        },
    }
}
