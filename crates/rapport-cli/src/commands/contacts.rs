use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{format_tags, or_dash, parse_contact_id, require_text};
use anyhow::Result;
use clap::Args;
use rapport_core::domain::{format_tag_list, ContactStatus, Priority};
use rapport_core::dto::ContactListItemDto;
use rapport_core::filter::parse_contact_filter;
use rapport_core::time::{format_timestamp_date, format_timestamp_datetime, now_utc};
use rapport_store::error::StoreError;
use rapport_store::repo::{ContactNew, ContactUpdate};

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    /// Comma-separated, e.g. "client, tech"
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub status: Option<ContactStatus>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub tags: Option<String>,
    #[arg(long)]
    pub status: Option<ContactStatus>,
    #[arg(long)]
    pub priority: Option<Priority>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search text plus an optional status:<active|inactive|all>
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Confirm the deletion; interactions of the contact go with it
    #[arg(long)]
    pub yes: bool,
}

pub fn add_contact(ctx: &Context<'_>, args: AddContactArgs) -> Result<()> {
    let name = require_text("name", args.name)?;
    let email = require_text("email", args.email)?;

    let contact = ctx.store.contacts().add(
        now_utc(),
        ContactNew {
            name,
            email,
            phone: args.phone.unwrap_or_default(),
            company: args.company.unwrap_or_default(),
            position: args.position.unwrap_or_default(),
            tags: args.tags.unwrap_or_default(),
            status: args.status.unwrap_or_default(),
            priority: args.priority.unwrap_or_default(),
            notes: args.notes.unwrap_or_default(),
            avatar: args.avatar,
        },
    );

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("created {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn edit_contact(ctx: &Context<'_>, args: EditContactArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;

    let update = ContactUpdate {
        name: args.name.map(|name| require_text("name", name)).transpose()?,
        email: args
            .email
            .map(|email| require_text("email", email))
            .transpose()?,
        phone: args.phone,
        company: args.company,
        position: args.position,
        tags: args.tags,
        status: args.status,
        priority: args.priority,
        notes: args.notes,
        avatar: args.avatar,
        last_contact: None,
    };

    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let contact = ctx
        .store
        .contacts()
        .update(&id, update)
        .ok_or_else(|| StoreError::ContactNotFound(id.to_string()))?;

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("updated {} {}", contact.id, contact.name);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let detail = ctx.store.contacts().detail(&id)?;

    if ctx.json {
        print_json(&detail)?;
        return Ok(());
    }

    let contact = &detail.contact;
    println!("id: {}", contact.id);
    println!("name: {}", contact.name);
    println!("email: {}", contact.email);
    println!("phone: {}", or_dash(&contact.phone));
    println!("company: {}", or_dash(&contact.company));
    println!("position: {}", or_dash(&contact.position));
    println!("status: {}", contact.status);
    println!("priority: {}", contact.priority);
    if !contact.tags.is_empty() {
        println!("tags: {}", format_tag_list(&contact.tags));
    }
    if !contact.notes.trim().is_empty() {
        println!("notes: {}", contact.notes);
    }
    println!("avatar: {}", contact.avatar);
    println!("created_at: {}", format_timestamp_datetime(contact.created_at));
    println!(
        "last_contact: {}",
        format_timestamp_datetime(contact.last_contact)
    );

    if detail.interactions.is_empty() {
        println!("interactions: none");
    } else {
        println!("interactions:");
        for interaction in &detail.interactions {
            println!(
                "  {} [{}] {} ({})",
                format_timestamp_datetime(interaction.date),
                interaction.kind,
                interaction.subject,
                interaction.outcome
            );
        }
    }

    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filter = parse_contact_filter(args.filter.as_deref().unwrap_or_default())?;
    let items: Vec<ContactListItemDto> = ctx
        .store
        .contacts()
        .search(&filter)
        .iter()
        .map(ContactListItemDto::from)
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for item in items {
        let tag_suffix = if item.tags.is_empty() {
            String::new()
        } else {
            format!(" {}", format_tags(&item.tags))
        };
        println!(
            "{}  {}  <{}>  [{}/{}]  {}{}",
            item.id,
            item.name,
            item.email,
            item.status,
            item.priority,
            format_timestamp_date(item.last_contact),
            tag_suffix
        );
    }

    Ok(())
}

pub fn delete_contact(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    if !args.yes {
        return Err(invalid_input(format!(
            "refusing to delete {} without --yes",
            id
        )));
    }

    let (contact, removed_interactions) = ctx
        .store
        .contacts()
        .delete(&id)
        .ok_or_else(|| StoreError::ContactNotFound(id.to_string()))?;

    if ctx.json {
        print_json(&serde_json::json!({
            "id": contact.id,
            "removed_interactions": removed_interactions,
        }))?;
    } else {
        println!(
            "deleted {} {} ({} interactions)",
            contact.id, contact.name, removed_interactions
        );
    }
    Ok(())
}
