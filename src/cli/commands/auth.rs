use clap::Subcommand;
use serde_json::{json, Value};

use super::resolve_password;
use crate::cli::client::ApiClient;
use crate::cli::config::{load_config, save_config};
use crate::cli::utils::{output_record, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Register a new advisor account")]
    Register {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "First name")]
        first_name: String,
        #[arg(long, help = "Last name")]
        last_name: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Login and store the session token")]
    Login {
        #[arg(help = "Email")]
        email: String,
        #[arg(long, help = "Password (read from stdin if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Logout and forget the stored token")]
    Logout,

    #[command(about = "Show current user information")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Register {
            email,
            first_name,
            last_name,
            password,
        } => {
            let password = resolve_password(password)?;
            let client = ApiClient::new(load_config()?);
            let reply = client
                .post(
                    "/auth/register",
                    &json!({
                        "firstName": first_name,
                        "lastName": last_name,
                        "email": email,
                        "password": password,
                    }),
                )
                .await?;

            output_success(&output_format, &format!("Registered {}", email), Some(reply.data))
        }
        AuthCommands::Login { email, password } => {
            let password = resolve_password(password)?;
            let mut config = load_config()?;
            let client = ApiClient::new(config.clone());
            let reply = client
                .post("/auth/login", &json!({ "email": email, "password": password }))
                .await?;

            let token = reply
                .data
                .get("token")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow::anyhow!("Login response did not contain a token"))?
                .to_string();

            config.set_session(email.clone(), token);
            save_config(&config)?;

            output_success(
                &output_format,
                &format!("Logged in as {}", email),
                reply.data.get("user").cloned(),
            )
        }
        AuthCommands::Logout => {
            let mut config = load_config()?;
            if config.token.is_some() {
                // Best effort: the server only clears its cookie.
                if let Err(e) = ApiClient::new(config.clone()).get("/auth/logout").await {
                    tracing::debug!("Server logout failed: {}", e);
                }
            }
            config.clear_session();
            save_config(&config)?;

            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Whoami => {
            let config = load_config()?;
            if config.token.is_none() {
                anyhow::bail!("Not logged in. Run `thesis auth login <email>` first");
            }
            let reply = ApiClient::new(config).get("/auth/me").await?;
            output_record(&output_format, &reply.data)
        }
    }
}
