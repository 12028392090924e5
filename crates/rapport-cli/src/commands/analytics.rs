use crate::commands::{print_json, Context};
use anyhow::Result;
use chrono::Local;
use rapport_core::domain::{InteractionKind, Priority};
use rapport_core::time::{format_timestamp_date, now_utc};

pub fn dashboard(ctx: &Context<'_>) -> Result<()> {
    let dashboard = ctx.store.dashboard(ctx.config.recent_limit);

    if ctx.json {
        return print_json(&dashboard);
    }

    println!("contacts: {}", dashboard.total_contacts);
    println!("active contacts: {}", dashboard.active_contacts);
    println!("interactions: {}", dashboard.total_interactions);

    println!("recent contacts:");
    if dashboard.recent_contacts.is_empty() {
        println!("  none");
    }
    for contact in &dashboard.recent_contacts {
        println!(
            "  {}  {}  [{}]  {}",
            contact.id,
            contact.name,
            contact.priority,
            format_timestamp_date(contact.last_contact)
        );
    }

    println!("recent interactions:");
    if dashboard.recent_interactions.is_empty() {
        println!("  none");
    }
    for interaction in &dashboard.recent_interactions {
        println!(
            "  {}  {}  [{}] {}",
            format_timestamp_date(interaction.date),
            interaction.contact_name.as_deref().unwrap_or("unknown contact"),
            interaction.kind,
            interaction.subject
        );
    }

    Ok(())
}

pub fn analytics(ctx: &Context<'_>) -> Result<()> {
    let report = ctx
        .store
        .analytics(now_utc(), &Local, ctx.config.timeline_days);

    if ctx.json {
        return print_json(&report);
    }

    let totals = &report.totals;
    println!("contacts: {}", totals.contacts);
    println!("active contacts: {}", totals.active_contacts);
    println!("interactions: {}", totals.interactions);
    println!("interactions this month: {}", totals.interactions_this_month);

    println!("contacts by priority:");
    for priority in Priority::ALL {
        println!(
            "  {}: {}",
            priority,
            report.contacts_by_priority.get(priority)
        );
    }

    println!("interactions by type:");
    for kind in InteractionKind::ALL {
        println!("  {}: {}", kind, report.interactions_by_type.get(kind));
    }

    println!("last {} days:", report.timeline.len());
    for day in report.timeline.iter().filter(|day| day.count > 0) {
        println!("  {}: {}", day.date, day.count);
    }

    let insights = &report.insights;
    println!(
        "average interactions per contact: {:.1}",
        insights.average_interactions_per_contact
    );
    println!(
        "most common priority: {}",
        insights
            .most_common_priority
            .map(|priority| priority.as_str())
            .unwrap_or("-")
    );
    println!(
        "most common type: {}",
        insights
            .most_common_type
            .map(|kind| kind.as_str())
            .unwrap_or("-")
    );
    println!("engagement rate: {}%", insights.engagement_rate_percent);

    Ok(())
}
