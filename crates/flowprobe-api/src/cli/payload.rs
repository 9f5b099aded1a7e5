//! `flowprobe payload` -- export the content-pipeline workflow definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;

use flowprobe_core::payload::build_content_pipeline;
use flowprobe_infra::filesystem::write_artifact;
use flowprobe_types::workflow::WorkflowDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadFormat {
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Serialization format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: PayloadFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn serialize(workflow: &WorkflowDefinition, format: PayloadFormat) -> Result<String> {
    let text = match format {
        PayloadFormat::Json => serde_json::to_string_pretty(workflow)?,
        PayloadFormat::Yaml => serde_yaml_ng::to_string(workflow)?,
    };
    Ok(text)
}

pub async fn export_payload(args: PayloadArgs, quiet: bool) -> Result<()> {
    let workflow = build_content_pipeline();
    let text = serialize(&workflow, args.format)?;

    match args.output {
        Some(path) => {
            write_artifact(&path, &text)
                .await
                .with_context(|| format!("Failed to write payload to {}", path.display()))?;
            tracing::info!(path = %path.display(), nodes = workflow.nodes.len(), "payload written");
            if !quiet {
                println!(
                    "  {} Wrote '{}' ({} nodes) to {}",
                    style("✓").green(),
                    workflow.name,
                    workflow.nodes.len(),
                    style(path.display()).cyan()
                );
            }
        }
        None => println!("{text}"),
    }

    Ok(())
}
