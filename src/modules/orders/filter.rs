//! Search filter for the orders table

use crate::data::OrderRecord;
use crate::domain::StatusLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Id,
    User,
    Project,
    Address,
    Status,
}

/// Fields free text is matched against, besides the date.
const SEARCHABLE: [FilterKey; 5] = [
    FilterKey::Id,
    FilterKey::User,
    FilterKey::Project,
    FilterKey::Address,
    FilterKey::Status,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    KeyValue(FilterKey, String),
    /// `status:` naming a whole label matches that label exactly.
    Status(StatusLabel),
    Free(String),
}

/// Parsed search input. Every token must match for a record to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilter {
    pub raw: String,
    pub tokens: Vec<FilterToken>,
}

impl OrderFilter {
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut tokens = Vec::new();
        for part in trimmed.split_whitespace() {
            let token = match part.split_once(':') {
                Some((key, value)) => match parse_filter_key(key) {
                    Some(FilterKey::Status) => match value.parse::<StatusLabel>() {
                        Ok(status) => FilterToken::Status(status),
                        Err(_) => FilterToken::KeyValue(FilterKey::Status, normalize(value)),
                    },
                    Some(key) => FilterToken::KeyValue(key, normalize(value)),
                    None => FilterToken::Free(normalize(part)),
                },
                None => FilterToken::Free(normalize(part)),
            };
            tokens.push(token);
        }
        Some(Self {
            raw: trimmed.to_string(),
            tokens,
        })
    }

    pub fn matches(&self, order: &OrderRecord) -> bool {
        self.tokens.iter().all(|token| match token {
            FilterToken::KeyValue(key, value) => field(order, *key).contains(value.as_str()),
            FilterToken::Status(status) => order.status == *status,
            FilterToken::Free(value) => {
                let value = value.as_str();
                let in_field = |key: &FilterKey| field(order, *key).contains(value);
                SEARCHABLE.iter().any(in_field) || normalize(order.relative_date).contains(value)
            }
        })
    }
}

fn parse_filter_key(key: &str) -> Option<FilterKey> {
    match key.to_lowercase().as_str() {
        "id" | "order" => Some(FilterKey::Id),
        "user" | "customer" => Some(FilterKey::User),
        "project" => Some(FilterKey::Project),
        "address" | "addr" => Some(FilterKey::Address),
        "status" => Some(FilterKey::Status),
        _ => None,
    }
}

/// Lowercase with spaces and `#` dropped, so "in progress" matches
/// "inprogress" and "CM9801" matches "#CM9801".
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '#')
        .collect::<String>()
        .to_lowercase()
}

fn field(order: &OrderRecord, key: FilterKey) -> String {
    match key {
        FilterKey::Id => normalize(order.id),
        FilterKey::User => normalize(order.customer),
        FilterKey::Project => normalize(order.project),
        FilterKey::Address => normalize(order.address),
        FilterKey::Status => normalize(order.status.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ORDERS;

    fn count(input: &str) -> usize {
        let filter = OrderFilter::parse(input).unwrap();
        ORDERS.iter().filter(|order| filter.matches(order)).count()
    }

    #[test]
    fn test_empty_input_is_no_filter() {
        assert!(OrderFilter::parse("   ").is_none());
    }

    #[test]
    fn test_parse_tokens() {
        let filter = OrderFilter::parse("status:Approved lane").unwrap();
        assert_eq!(filter.raw, "status:Approved lane");
        assert_eq!(
            filter.tokens,
            vec![
                FilterToken::Status(StatusLabel::Approved),
                FilterToken::Free("lane".to_string()),
            ]
        );
    }

    #[test]
    fn test_key_value_matches() {
        assert_eq!(count("status:approved"), 4);
        assert_eq!(count("status:inprogress"), 1);
        assert_eq!(count("id:CM9805"), 1);
        assert_eq!(count("user:parker"), 3);
        assert_eq!(count("project:web"), 4);
    }

    #[test]
    fn test_whole_status_label_matches_exactly() {
        let filter = OrderFilter::parse("status:in-progress").unwrap();
        assert_eq!(
            filter.tokens,
            vec![FilterToken::Status(StatusLabel::InProgress)]
        );
        assert_eq!(count("status:in-progress"), 1);
        assert_eq!(count("status:Rejected"), 2);
    }

    #[test]
    fn test_partial_status_falls_back_to_substring() {
        let filter = OrderFilter::parse("status:appr").unwrap();
        let expected = FilterToken::KeyValue(FilterKey::Status, "appr".to_string());
        assert_eq!(filter.tokens, vec![expected]);
        assert_eq!(count("status:appr"), 4);
    }

    #[test]
    fn test_free_text_and_conjunction() {
        assert_eq!(count("lane"), 6);
        assert_eq!(count("lane status:rejected"), 1);
        assert_eq!(count("nobody"), 0);
    }

    #[test]
    fn test_unknown_key_is_free_text() {
        let filter = OrderFilter::parse("color:red").unwrap();
        assert_eq!(
            filter.tokens,
            vec![FilterToken::Free("color:red".to_string())]
        );
    }
}
