use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

/// Rich-text card description as shipped by the feed.
///
/// The wrapped fragment is HTML that the data source sanitized before
/// publishing. It is never user input. Anything that displays it injects the
/// fragment verbatim, so construction goes through [`TrustedHtml::from_feed`]
/// and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_feed(fragment: String) -> Self {
        TrustedHtml(fragment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Canonical card record. Feed-side field naming differences are resolved by
/// [`normalize_cards`]; past that boundary every field is a plain string.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub card_text: TrustedHtml,
    pub card_type: String,
    pub image: String,
}

/// One record as it arrives from a feed.
///
/// The remote API and the bridge dump disagree on field names (`name` vs
/// `Title`, `image` vs `src`, `id` vs `cardId`), and older dumps carry
/// numbers where strings are expected, so every field starts life as a raw
/// JSON value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    #[serde(default, alias = "cardId")]
    pub id: Value,
    #[serde(default, alias = "Title")]
    pub name: Value,
    #[serde(default, rename = "cardText")]
    pub card_text: Value,
    #[serde(default, rename = "cardType")]
    pub card_type: Value,
    #[serde(default, alias = "src")]
    pub image: Value,
}

impl RawCard {
    /// Collapses a raw record into the canonical shape.
    ///
    /// A record with no usable identity is dropped; any other missing field
    /// becomes an empty string so later case-insensitive matching never sees
    /// a non-string value.
    pub fn normalize(self) -> Option<Card> {
        let id = coerce_string(&self.id);
        if id.is_empty() {
            return None;
        }

        Some(Card {
            id,
            name: coerce_string(&self.name),
            card_text: TrustedHtml::from_feed(coerce_string(&self.card_text)),
            card_type: coerce_string(&self.card_type),
            image: coerce_string(&self.image),
        })
    }
}

/// String coercion for loosely typed feed values. Numbers and booleans render
/// through their JSON form; null and structural values collapse to the empty
/// string.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Normalizes a full feed payload and de-duplicates it by id, keeping the
/// first occurrence in feed order.
pub fn normalize_cards(raw: Vec<RawCard>) -> Vec<Card> {
    let mut dropped: usize = 0;
    let mut seen = HashSet::new();

    let cards: Vec<Card> = raw
        .into_iter()
        .filter_map(|record| {
            let card = record.normalize();
            if card.is_none() {
                dropped += 1;
            }
            card
        })
        .filter(|card| seen.insert(card.id.clone()))
        .collect();

    if dropped > 0 {
        log::warn!("Dropped {} card record(s) without an id", dropped);
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_field_names_normalize() {
        let raw: Vec<RawCard> = serde_json::from_str(
            r#"[{
                "cardId": "CMF-001",
                "Title": "Lumia, Saint of World Rebirth",
                "cardText": "<b>[Enter]</b> Draw a card.",
                "cardType": "Ruler",
                "src": "https://cards.example/cmf-001.jpg"
            }]"#,
        )
        .unwrap();

        let cards = normalize_cards(raw);
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.id, "CMF-001");
        assert_eq!(card.name, "Lumia, Saint of World Rebirth");
        assert_eq!(card.card_text.as_str(), "<b>[Enter]</b> Draw a card.");
        assert_eq!(card.card_type, "Ruler");
        assert_eq!(card.image, "https://cards.example/cmf-001.jpg");
    }

    #[test]
    fn api_field_names_normalize() {
        let raw: Vec<RawCard> = serde_json::from_str(
            r#"[{
                "id": 42,
                "name": "Wizard",
                "cardText": "",
                "cardType": "Resonator",
                "image": "https://cards.example/42.jpg"
            }]"#,
        )
        .unwrap();

        let cards = normalize_cards(raw);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "42");
        assert_eq!(cards[0].name, "Wizard");
        assert_eq!(cards[0].image, "https://cards.example/42.jpg");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let raw: Vec<RawCard> = serde_json::from_str(r#"[{"id": "x"}]"#).unwrap();

        let card = normalize_cards(raw).remove(0);
        assert_eq!(card.name, "");
        assert!(card.card_text.is_empty());
        assert_eq!(card.card_type, "");
        assert_eq!(card.image, "");
    }

    #[test]
    fn records_without_an_id_are_dropped() {
        let raw: Vec<RawCard> = serde_json::from_str(
            r#"[{"name": "Ghost"}, {"id": null, "name": "Null"}, {"id": "1", "name": "Kept"}]"#,
        )
        .unwrap();

        let cards = normalize_cards(raw);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Kept");
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let raw: Vec<RawCard> = serde_json::from_str(
            r#"[{"id": "1", "name": "First"}, {"id": "2", "name": "Other"}, {"id": "1", "name": "Second"}]"#,
        )
        .unwrap();

        let cards = normalize_cards(raw);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "First");
        assert_eq!(cards[1].name, "Other");
    }
}
