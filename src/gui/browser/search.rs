use crate::core::Card;

/// Case-insensitive substring match against the card name, its description
/// markup, and its id. `query` must already be lower-cased; the empty query
/// matches everything.
pub fn matches_search(card: &Card, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    card.name.to_lowercase().contains(query)
        || card.card_text.as_str().to_lowercase().contains(query)
        || card.id.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrustedHtml;

    fn card(id: &str, name: &str, text: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            card_text: TrustedHtml::from_feed(text.to_string()),
            card_type: "Resonator".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_search(&card("1", "Dragon", ""), ""));
        assert!(matches_search(&card("", "", ""), ""));
    }

    #[test]
    fn name_matches_ignore_case() {
        let dragon = card("1", "Dragon", "");
        assert!(matches_search(&dragon, "dra"));
        assert!(matches_search(&dragon, "dragon"));
        assert!(!matches_search(&dragon, "wizard"));
    }

    #[test]
    fn description_and_id_also_match() {
        let wizard = card("RULER-007", "Wizard", "<b>Flying</b> until end of turn.");
        assert!(matches_search(&wizard, "flying"));
        assert!(matches_search(&wizard, "ruler-007"));
        assert!(matches_search(&wizard, "007"));
        assert!(!matches_search(&wizard, "dragon"));
    }
}
