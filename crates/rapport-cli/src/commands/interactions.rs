use crate::commands::{print_json, Context};
use crate::util::{or_dash, parse_contact_id, require_text};
use anyhow::Result;
use clap::Args;
use rapport_core::domain::{InteractionKind, Outcome};
use rapport_core::dto::InteractionListItemDto;
use rapport_core::filter::parse_interaction_filter;
use rapport_core::time::{format_timestamp_datetime, now_utc};
use rapport_store::repo::InteractionNew;
use tracing::warn;

#[derive(Debug, Args)]
pub struct AddInteractionArgs {
    pub contact_id: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<InteractionKind>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Args)]
pub struct InteractionsArgs {
    /// Search text plus an optional type:<email|call|meeting|other|all>
    #[arg(long)]
    pub filter: Option<String>,
    /// Only interactions logged against this contact
    #[arg(long)]
    pub contact: Option<String>,
}

pub fn add_interaction(ctx: &Context<'_>, args: AddInteractionArgs) -> Result<()> {
    let contact_id = parse_contact_id(&args.contact_id)?;
    let subject = require_text("subject", args.subject)?;

    if ctx.store.contacts().get(&contact_id).is_none() {
        warn!(contact_id = %contact_id, "logging interaction for unknown contact");
    }

    let interaction = ctx.store.interactions().add(
        now_utc(),
        InteractionNew {
            contact_id,
            kind: args.kind.unwrap_or_default(),
            subject,
            description: args.description.unwrap_or_default(),
            outcome: args.outcome.unwrap_or_default(),
        },
    );

    if ctx.json {
        print_json(&interaction)?;
    } else {
        println!(
            "logged {} [{}] for {}",
            interaction.id, interaction.kind, interaction.contact_id
        );
    }
    Ok(())
}

pub fn list_interactions(ctx: &Context<'_>, args: InteractionsArgs) -> Result<()> {
    let contact_id = args
        .contact
        .as_deref()
        .map(parse_contact_id)
        .transpose()?;
    let filter = parse_interaction_filter(args.filter.as_deref().unwrap_or_default())?;

    let mut items: Vec<InteractionListItemDto> = ctx.store.interactions().search(&filter);
    if let Some(contact_id) = &contact_id {
        items.retain(|item| &item.contact_id == contact_id);
    }

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no interactions");
        return Ok(());
    }

    for item in items {
        let who = item.contact_name.as_deref().unwrap_or("unknown contact");
        println!(
            "{}  {}  [{}] {} ({})  {}",
            format_timestamp_datetime(item.date),
            who,
            item.kind,
            item.subject,
            item.outcome,
            or_dash(&item.description)
        );
    }

    Ok(())
}
