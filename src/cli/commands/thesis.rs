use clap::{ArgGroup, Subcommand};
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::config::load_config;
use crate::cli::utils::{output_record, output_success, output_theses};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ThesisCommands {
    #[command(about = "List theses, optionally filtered")]
    List {
        #[arg(long, help = "Substring of the thesis keywords")]
        keyword: Option<String>,
        #[arg(long, help = "Exact thesis year")]
        year: Option<String>,
        #[arg(long, help = "Substring of the thesis domain")]
        domain: Option<String>,
        #[arg(long, help = "Substring of the advisor's first or last name")]
        advisor: Option<String>,
        #[arg(long, help = "Only theses supervised by the logged-in advisor")]
        mine: bool,
    },

    #[command(about = "Show a single thesis")]
    Show {
        #[arg(help = "Thesis id")]
        id: i32,
    },

    #[command(about = "Accept or refuse a thesis topic")]
    #[command(group(ArgGroup::new("decision").required(true).args(["accept", "refuse"])))]
    Validate {
        #[arg(help = "Thesis id")]
        id: i32,
        #[arg(long, help = "Accept the topic")]
        accept: bool,
        #[arg(long, value_name = "REASON", help = "Refuse the topic with a reason")]
        refuse: Option<String>,
    },
}

pub async fn handle(cmd: ThesisCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new(load_config()?);
    if client.config().token.is_none() {
        anyhow::bail!("Not logged in. Run `thesis auth login <email>` first");
    }

    match cmd {
        ThesisCommands::List {
            keyword,
            year,
            domain,
            advisor,
            mine,
        } => {
            let reply = if mine {
                client.get("/thesis/mine").await?
            } else {
                let query: Vec<(&str, String)> = [
                    ("keyword", keyword),
                    ("year", year),
                    ("domain", domain),
                    ("advisorName", advisor),
                ]
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect();
                client.get_query("/thesis", &query).await?
            };
            output_theses(&output_format, &reply.data)
        }
        ThesisCommands::Show { id } => {
            let reply = client.get(&format!("/thesis/{}", id)).await?;
            output_record(&output_format, &reply.data)
        }
        ThesisCommands::Validate { id, accept, refuse } => {
            let body = json!({
                "topicValidation": accept,
                "refusedTopic": refuse,
            });
            let reply = client.put(&format!("/thesis/{}/validate-topic", id), &body).await?;
            output_success(&output_format, &reply.message, Some(body))
        }
    }
}
