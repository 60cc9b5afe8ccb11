use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::config::{load_config, save_config};
use crate::cli::utils::{output_error, output_record, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Point the CLI at an API server")]
    Set {
        #[arg(help = "Server base URL, e.g. http://localhost:3000")]
        url: String,
    },

    #[command(about = "Show the configured server")]
    Current,

    #[command(about = "Check server health status from the /health endpoint")]
    Health,
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Set { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("Server URL must start with http:// or https://");
            }

            let mut config = load_config()?;
            if config.server_url != url {
                // A token from another server is meaningless here.
                config.clear_session();
            }
            config.server_url = url.clone();
            save_config(&config)?;

            output_success(
                &output_format,
                &format!("Server set to {}", url),
                Some(json!({ "serverUrl": url })),
            )
        }
        ServerCommands::Current => {
            let config = load_config()?;
            output_record(
                &output_format,
                &json!({
                    "serverUrl": config.server_url,
                    "email": config.email,
                    "loggedInAt": config.logged_in_at,
                }),
            )
        }
        ServerCommands::Health => {
            let client = ApiClient::new(load_config()?);
            let url = client.config().server_url.clone();
            let reply = client.health().await?;

            if reply.status.is_success() {
                output_success(&output_format, &format!("{} is healthy", url), Some(reply.data))
            } else {
                output_error(
                    &output_format,
                    &format!("{} is unhealthy: {}", url, reply.message),
                    Some(reply.status.as_str()),
                )?;
                anyhow::bail!("health check failed with status {}", reply.status.as_u16())
            }
        }
    }
}
