use anyhow::Result;
use clap::{Parser, Subcommand};
use rapport_config::AppConfig;
use rapport_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod analytics;
pub mod contacts;
pub mod interactions;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub verbose: bool,
    pub config: &'a AppConfig,
}

/// One shell line, parsed without a binary name.
#[derive(Debug, Parser)]
#[command(
    name = "rapport",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "commands:\n{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Add a contact
    AddContact(contacts::AddContactArgs),
    /// Overwrite fields on an existing contact
    EditContact(contacts::EditContactArgs),
    /// Show a contact with its interactions
    Show(contacts::ShowArgs),
    /// List contacts, optionally filtered
    List(contacts::ListArgs),
    /// Delete a contact and its interactions
    Delete(contacts::DeleteArgs),
    /// Log an interaction against a contact
    AddInteraction(interactions::AddInteractionArgs),
    /// List interactions, most recent first
    Interactions(interactions::InteractionsArgs),
    /// Headline counts and the first few records
    Dashboard,
    /// Aggregates, groupings and the daily timeline
    Analytics,
    /// End the session
    #[command(alias = "quit")]
    Exit,
}

pub fn dispatch(ctx: &Context<'_>, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::AddContact(args) => contacts::add_contact(ctx, args),
        ShellCommand::EditContact(args) => contacts::edit_contact(ctx, args),
        ShellCommand::Show(args) => contacts::show_contact(ctx, args),
        ShellCommand::List(args) => contacts::list_contacts(ctx, args),
        ShellCommand::Delete(args) => contacts::delete_contact(ctx, args),
        ShellCommand::AddInteraction(args) => interactions::add_interaction(ctx, args),
        ShellCommand::Interactions(args) => interactions::list_interactions(ctx, args),
        ShellCommand::Dashboard => analytics::dashboard(ctx),
        ShellCommand::Analytics => analytics::analytics(ctx),
        ShellCommand::Exit => Ok(()),
    }
}

/// Writes one compact JSON document per line so scripted sessions can
/// read the output line by line.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
