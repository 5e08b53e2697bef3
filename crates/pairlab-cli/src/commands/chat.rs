use anyhow::Result;
use colored::Colorize;
use pairlab_infrastructure::{AppConfig, PairlabPaths};
use pairlab_interaction::{ChatClient, ChatError};

use crate::notice;

pub async fn run(config: &AppConfig, message: &str) -> Result<()> {
    let secret_path = PairlabPaths::ensure_secret_file()?;

    let mut client = match ChatClient::try_from_config() {
        Ok(client) => client,
        Err(err @ ChatError::MissingCredential(_)) => {
            notice::failure(&err.to_string());
            println!("A template is waiting at {}", secret_path.display());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let chat = &config.chat;
    if let Some(model) = chat.model.as_deref() {
        // PAIRLAB_CHAT_MODEL wins over config.toml
        if std::env::var("PAIRLAB_CHAT_MODEL").is_err() {
            client = client.with_model(model);
        }
    }
    if let Some(base_url) = chat.base_url.as_deref() {
        client = client.with_base_url(base_url);
    }
    if let Some(max_tokens) = chat.max_tokens {
        client = client.with_max_tokens(max_tokens);
    }
    if let Some(temperature) = chat.temperature {
        client = client.with_temperature(temperature);
    }

    eprintln!("{}", "waiting for the concierge...".dimmed());
    let reply = client.ask(message).await?;
    println!("{reply}");
    Ok(())
}
