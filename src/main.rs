// src/main.rs

use anyhow::Result;
use clap::Parser;
use txtforge::cli::Cli;
use txtforge::{detect_codebase, process_files};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let detection = detect_codebase(&cli.source_dir);

    if cli.detect_only {
        println!("{}", serde_json::to_string_pretty(&detection)?);
        return Ok(());
    }

    let template_ids = cli
        .templates
        .clone()
        .unwrap_or_else(|| detection.ids.clone());
    if template_ids.is_empty() {
        log::warn!("No templates detected or given; selection will rely on rules only");
    }

    let config = cli.to_config(template_ids);
    let result = process_files(&config);

    if !result.success {
        eprintln!("{}", result.message);
        std::process::exit(1);
    }

    println!("{}", result.message);
    println!("Output: {}", result.output_path);
    for file in &result.files {
        println!("  {file}");
    }
    if result.gitignore_modified {
        println!("Note: added the output folder to .gitignore");
    }
    Ok(())
}
