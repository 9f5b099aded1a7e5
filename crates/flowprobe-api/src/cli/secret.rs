//! `flowprobe secret` -- store and check the platform API key.

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use dialoguer::Password;
use secrecy::ExposeSecret;

use flowprobe_types::secret::mask;

use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum SecretCommand {
    /// Store the API key in the OS keychain.
    Set {
        /// Secret value (prompted with hidden input if omitted).
        value: Option<String>,
    },

    /// Show which provider resolves the API key.
    Check,
}

pub async fn handle_secret(state: &AppState, action: SecretCommand, json: bool) -> Result<()> {
    let key = state.config.probe.api_key_secret.as_str();

    match action {
        SecretCommand::Set { value } => {
            let value = match value {
                Some(v) => v,
                None => Password::new()
                    .with_prompt(format!("Value for {key}"))
                    .interact()
                    .context("Failed to read secret value")?,
            };

            let source = state
                .secrets
                .store(key, &value)
                .await
                .with_context(|| format!("Failed to store secret '{key}'"))?;

            if json {
                let out = serde_json::json!({ "key": key, "stored_in": source.to_string() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "  {} Stored {} in {}",
                    style("✓").green(),
                    style(key).cyan(),
                    source
                );
            }
        }

        SecretCommand::Check => {
            let resolved = state
                .secrets
                .resolve(key)
                .await
                .with_context(|| format!("Failed to resolve secret '{key}'"))?;

            if json {
                let out = match &resolved {
                    Some(r) => serde_json::json!({
                        "key": key,
                        "found": true,
                        "source": r.source.to_string(),
                        "masked": mask(r.value.expose_secret()),
                    }),
                    None => serde_json::json!({ "key": key, "found": false }),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            match resolved {
                Some(r) => println!(
                    "  {} {} resolved from {} ({})",
                    style("✓").green(),
                    style(key).cyan(),
                    r.source,
                    mask(r.value.expose_secret())
                ),
                None => {
                    println!(
                        "  {} {} not found in environment or keychain",
                        style("✗").red(),
                        style(key).cyan()
                    );
                    println!(
                        "  {}",
                        style(format!("Set it with: export {key}=... or flowprobe secret set")).dim()
                    );
                }
            }
        }
    }

    Ok(())
}
