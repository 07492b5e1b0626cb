mod cli;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{build_conversation, Commands};
use neoclient::{ChatCompletionRequest, ClientConfig, CompletionRequest, NeoClient, Usage};

#[derive(Parser)]
#[command(name = "neoclient")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Service base URL (defaults to NEOINFER_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key (defaults to NEOINFER_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Print the full response as JSON instead of the generated text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_env(cli.base_url, cli.api_key)?;
    let client = NeoClient::new(config)?;

    match cli.command {
        Commands::Complete {
            model,
            prompt,
            sampling,
        } => {
            let request = CompletionRequest::new(model, prompt)
                .with_max_tokens(sampling.max_tokens)
                .with_temperature(sampling.temperature)
                .with_top_p(sampling.top_p);

            let completion = client.completions().create(&request).await?;
            log_usage(&completion.model, &completion.usage);

            if cli.json {
                print_json(&completion)?;
            } else {
                println!("{}", completion.text().unwrap_or_default());
            }
        }

        Commands::Chat {
            model,
            system,
            messages,
            ignore_eos,
            sampling,
        } => {
            let request = ChatCompletionRequest::new(model, build_conversation(system, &messages))
                .with_max_tokens(sampling.max_tokens)
                .with_temperature(sampling.temperature)
                .with_top_p(sampling.top_p)
                .with_ignore_eos(ignore_eos);

            let chat = client.chat_completions().create(&request).await?;
            log_usage(&chat.model, &chat.usage);

            if cli.json {
                print_json(&chat)?;
            } else {
                println!("{}", chat.content().unwrap_or_default());
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` selects debug over info.
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

fn log_usage(model: &str, usage: &Usage) {
    info!(
        "{}: {} prompt + {} completion = {} tokens",
        model, usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(log_filter(true).to_string(), "debug");
        assert_eq!(log_filter(false).to_string(), "info");
    }

    #[test]
    fn chat_requires_a_message() {
        let res = Cli::try_parse_from(["neoclient", "chat", "--model", "m"]);
        assert!(res.is_err(), "chat without --message should be rejected");
    }

    #[test]
    fn chat_collects_messages_in_order() {
        let cli = Cli::try_parse_from([
            "neoclient",
            "chat",
            "--model",
            "m",
            "-M",
            "user=hi",
            "-M",
            "assistant=yo",
            "-M",
            "user=there",
            "--ignore-eos",
        ])
        .unwrap();

        match cli.command {
            Commands::Chat {
                messages,
                ignore_eos,
                sampling,
                ..
            } => {
                assert_eq!(messages, vec!["user=hi", "assistant=yo", "user=there"]);
                assert!(ignore_eos);
                assert_eq!(sampling.max_tokens, 1024);
            }
            Commands::Complete { .. } => panic!("expected chat"),
        }
    }

    #[test]
    fn complete_accepts_sampling_flags() {
        let cli = Cli::try_parse_from([
            "neoclient",
            "--base-url",
            "http://localhost:8000",
            "complete",
            "-m",
            "neolang-small",
            "-p",
            "Once upon a time,",
            "--max-tokens",
            "50",
            "--temperature",
            "0.7",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        match cli.command {
            Commands::Complete { sampling, .. } => {
                assert_eq!(sampling.max_tokens, 50);
                assert_eq!(sampling.temperature, 0.7);
                assert_eq!(sampling.top_p, 1.0);
            }
            Commands::Chat { .. } => panic!("expected complete"),
        }
    }
}
