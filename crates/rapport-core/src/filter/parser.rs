use crate::domain::{ContactStatus, InteractionKind};
use crate::filter::ast::{ContactFilter, InteractionFilter};
use crate::filter::FilterParseError;

pub fn parse_contact_filter(input: &str) -> Result<ContactFilter, FilterParseError> {
    let mut filter = ContactFilter::default();
    let mut seen_status = false;
    let mut terms = Vec::new();

    for token in input.split_whitespace() {
        if let Some(raw) = token.strip_prefix("status:") {
            if seen_status {
                return Err(FilterParseError::DuplicateSelector("status"));
            }
            seen_status = true;
            filter.status = parse_status_selector(raw)?;
        } else {
            terms.push(token);
        }
    }

    filter.text = terms.join(" ");
    Ok(filter)
}

pub fn parse_interaction_filter(input: &str) -> Result<InteractionFilter, FilterParseError> {
    let mut filter = InteractionFilter::default();
    let mut seen_type = false;
    let mut terms = Vec::new();

    for token in input.split_whitespace() {
        if let Some(raw) = token.strip_prefix("type:") {
            if seen_type {
                return Err(FilterParseError::DuplicateSelector("type"));
            }
            seen_type = true;
            filter.kind = parse_type_selector(raw)?;
        } else {
            terms.push(token);
        }
    }

    filter.text = terms.join(" ");
    Ok(filter)
}

fn parse_status_selector(raw: &str) -> Result<Option<ContactStatus>, FilterParseError> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse::<ContactStatus>()
        .map(Some)
        .map_err(|_| FilterParseError::InvalidStatusSelector(raw.to_string()))
}

fn parse_type_selector(raw: &str) -> Result<Option<InteractionKind>, FilterParseError> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse::<InteractionKind>()
        .map(Some)
        .map_err(|_| FilterParseError::InvalidTypeSelector(raw.to_string()))
}
