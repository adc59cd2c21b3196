//! One-shot tool that deletes every application command a Discord
//! application has registered, globally and in every guild the bot belongs
//! to.
//!
//! Credentials come from flags or from named environment variables; a `.env`
//! file in the working directory is picked up when present.

use anyhow::Result;
use clap::Parser;
use log::info;

use command_clearer::config::{self, Config, CredentialSources};
use command_clearer::purge;

#[derive(Parser)]
#[command(name = "command-clearer")]
#[command(about = "Deletes all global and guild application commands for a Discord application")]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Discord token
    #[arg(long)]
    discord_token: Option<String>,

    /// Name of the environment variable containing the Discord token
    #[arg(long)]
    discord_token_var: Option<String>,

    /// Discord application ID
    #[arg(long)]
    discord_app_id: Option<String>,

    /// Name of the environment variable containing the Discord application ID
    #[arg(long)]
    discord_app_id_var: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    config::init_logging(&cli.log_level)?;
    config::load_dotenv()?;

    let config = Config::resolve(&CredentialSources {
        discord_token: cli.discord_token,
        discord_token_var: cli.discord_token_var,
        discord_app_id: cli.discord_app_id,
        discord_app_id_var: cli.discord_app_id_var,
    })?;

    let http = purge::connect(&config.discord_token, config.application_id).await?;

    let deleted_count = purge::purge_all_commands(&http).await?;

    info!("Deleted {deleted_count} commands successfully!");

    Ok(())
}
