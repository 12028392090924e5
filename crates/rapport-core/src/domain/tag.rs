/// Splits comma-separated tag input into trimmed, non-empty entries,
/// keeping their original order.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_tag_list(tags: &[String]) -> String {
    tags.join(", ")
}
