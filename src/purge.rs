//! # Feature: Command Purge
//!
//! Deletes every application command registered for the application over the
//! Discord REST API: the global set first, then each guild's set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial global + guild purge with running delete count

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serenity::http::Http;
use serenity::model::id::{CommandId, GuildId};

/// Guilds are fetched as a single page of at most this many entries. A bot
/// in more guilds than this never sees the remainder.
pub const GUILD_PAGE_LIMIT: u64 = 100;

/// The slice of the Discord API this tool consumes: enumerating and deleting
/// application commands, plus listing the guilds the bot belongs to.
#[async_trait]
pub trait CommandRegistry {
    /// All globally registered commands for the application.
    async fn global_commands(&self) -> Result<Vec<CommandId>>;

    /// Delete one globally registered command.
    async fn delete_global_command(&self, command_id: CommandId) -> Result<()>;

    /// First page of guilds the bot belongs to, at most `limit` entries.
    async fn current_guilds(&self, limit: u64) -> Result<Vec<GuildId>>;

    /// All commands the application registered in one guild.
    async fn guild_commands(&self, guild_id: GuildId) -> Result<Vec<CommandId>>;

    /// Delete one guild-scoped command.
    async fn delete_guild_command(&self, guild_id: GuildId, command_id: CommandId) -> Result<()>;
}

#[async_trait]
impl CommandRegistry for Http {
    async fn global_commands(&self) -> Result<Vec<CommandId>> {
        let commands = self.get_global_application_commands().await?;
        Ok(commands.into_iter().map(|command| command.id).collect())
    }

    async fn delete_global_command(&self, command_id: CommandId) -> Result<()> {
        self.delete_global_application_command(u64::from(command_id))
            .await?;
        Ok(())
    }

    async fn current_guilds(&self, limit: u64) -> Result<Vec<GuildId>> {
        let guilds = self.get_guilds(None, Some(limit)).await?;
        Ok(guilds.into_iter().map(|guild| guild.id).collect())
    }

    async fn guild_commands(&self, guild_id: GuildId) -> Result<Vec<CommandId>> {
        let commands = self
            .get_guild_application_commands(u64::from(guild_id))
            .await?;
        Ok(commands.into_iter().map(|command| command.id).collect())
    }

    async fn delete_guild_command(&self, guild_id: GuildId, command_id: CommandId) -> Result<()> {
        self.delete_guild_application_command(u64::from(guild_id), u64::from(command_id))
            .await?;
        Ok(())
    }
}

/// Open an authenticated REST session for the application.
///
/// The handle is verified with a current-user lookup before anything
/// destructive happens, so a bad token fails here rather than on the first
/// delete.
pub async fn connect(token: &str, application_id: u64) -> Result<Http> {
    let http = Http::new_with_application_id(token, application_id);

    let user = http
        .get_current_user()
        .await
        .context("Failed to create Discord session")?;
    info!("Authenticated as {} ({})", user.name, user.id);

    Ok(http)
}

/// Delete every application command visible to the session and return how
/// many were deleted.
///
/// Strictly sequential; the first failed call aborts the run with whatever
/// already happened left as-is.
pub async fn purge_all_commands(registry: &impl CommandRegistry) -> Result<u64> {
    let mut deleted_count: u64 = 0;

    let global_commands = registry
        .global_commands()
        .await
        .context("Failed to get global commands")?;
    info!("Purging {} global commands", global_commands.len());

    for command_id in global_commands {
        debug!("Deleting global command {command_id}");
        registry
            .delete_global_command(command_id)
            .await
            .context("Failed to delete command")?;
        deleted_count += 1;
    }

    let guilds = registry
        .current_guilds(GUILD_PAGE_LIMIT)
        .await
        .context("Failed to get guilds")?;
    info!("Checking commands in {} guilds", guilds.len());

    for guild_id in guilds {
        let guild_commands = registry
            .guild_commands(guild_id)
            .await
            .context("Failed to get guild commands")?;
        info!(
            "Purging {} commands in guild {guild_id}",
            guild_commands.len()
        );

        for command_id in guild_commands {
            debug!("Deleting command {command_id} in guild {guild_id}");
            registry
                .delete_guild_command(guild_id, command_id)
                .await
                .context("Failed to delete guild command")?;
            deleted_count += 1;
        }
    }

    Ok(deleted_count)
}
