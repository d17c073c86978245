use std::collections::HashSet;

use super::search::matches_search;
use crate::core::Card;

/// Cards shown on one page of the browser list.
pub const PAGE_SIZE: usize = 20;

/// View state for the card browser: the live search text, the 1-based page
/// number, and the current selection.
///
/// The filtered index list is derived from the collection and rebuilt lazily
/// whenever an input changes. Page navigation always slices that filtered
/// list, never the raw collection.
pub struct BrowserState {
    search: String,
    current_page: usize,
    selected: Option<Card>,
    filtered_indices: Vec<usize>,
    dirty: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            search: String::new(),
            current_page: 1,
            selected: None,
            filtered_indices: Vec::new(),
            dirty: true,
        }
    }
}

impl BrowserState {
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Editing the search text sends the pager back to the first page.
    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.current_page = 1;
            self.dirty = true;
        }
    }

    /// The collection was replaced; start over from page one.
    pub fn on_collection_changed(&mut self) {
        self.current_page = 1;
        self.dirty = true;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered_indices.len(), PAGE_SIZE)
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Indices into the collection for the cards on the current page. A page
    /// past the end comes back empty rather than out of range.
    pub fn page_indices(&self) -> &[usize] {
        let (start, end) = page_span(self.filtered_indices.len(), self.current_page, PAGE_SIZE);
        &self.filtered_indices[start..end]
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Selection is independent of filtering and pagination.
    pub fn select(&mut self, card: Card) {
        self.selected = Some(card);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Card> {
        self.selected.as_ref()
    }

    /// Rebuilds the filtered index list when an input changed, or when the
    /// stored indices no longer fit the collection they were computed from.
    pub fn ensure_indices(&mut self, cards: &[Card]) {
        let needs_rebuild =
            self.dirty || self.filtered_indices.iter().any(|&index| index >= cards.len());

        if needs_rebuild {
            self.recompute_indices(cards);
        }
    }

    fn recompute_indices(&mut self, cards: &[Card]) {
        self.filtered_indices = filter_indices(cards, &self.search);
        self.dirty = false;
    }
}

/// Total page count for `len` items: at least one page, even when empty.
pub(crate) fn page_count(len: usize, size: usize) -> usize {
    len.div_ceil(size).max(1)
}

/// Bounds of `page` (1-based) over `len` items, clamped so an out-of-range
/// page yields an empty span.
pub(crate) fn page_span(len: usize, page: usize, size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

/// Filters the collection by the search text and de-duplicates the result by
/// id, keeping the first occurrence in collection order.
pub(crate) fn filter_indices(cards: &[Card], search: &str) -> Vec<usize> {
    let query = search.trim().to_lowercase();
    let mut seen = HashSet::new();

    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| matches_search(card, &query))
        .filter(|(_, card)| seen.insert(card.id.clone()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrustedHtml;

    fn card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            card_text: TrustedHtml::default(),
            card_type: "Resonator".to_string(),
            image: String::new(),
        }
    }

    fn collection(count: usize) -> Vec<Card> {
        (0..count).map(|i| card(&format!("card-{:03}", i), &format!("Card {}", i))).collect()
    }

    #[test]
    fn page_count_has_a_floor_of_one() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(2, 1), 2);
    }

    #[test]
    fn page_span_clamps_to_bounds() {
        assert_eq!(page_span(45, 1, 20), (0, 20));
        assert_eq!(page_span(45, 3, 20), (40, 45));
        assert_eq!(page_span(45, 4, 20), (45, 45));
        assert_eq!(page_span(0, 1, 20), (0, 0));
    }

    #[test]
    fn page_length_matches_remainder() {
        for len in [0usize, 1, 19, 20, 21, 45] {
            for page in 1..=5 {
                let (start, end) = page_span(len, page, 20);
                let expected = 20.min(len.saturating_sub((page - 1) * 20));
                assert_eq!(end - start, expected, "len={} page={}", len, page);
            }
        }
    }

    #[test]
    fn single_card_pages() {
        let cards = vec![card("1", "Dragon"), card("2", "Wizard")];

        let all = filter_indices(&cards, "");
        assert_eq!(page_count(all.len(), 1), 2);
        assert_eq!(page_span(all.len(), 1, 1), (0, 1));
        assert_eq!(page_span(all.len(), 2, 1), (1, 2));

        assert_eq!(filter_indices(&cards, "dra"), vec![0]);
        assert_eq!(filter_indices(&cards, "DRA"), vec![0]);
    }

    #[test]
    fn filter_deduplicates_by_id_keeping_first() {
        let cards = vec![card("1", "Dragon"), card("2", "Wizard"), card("1", "Dragon (reprint)")];

        assert_eq!(filter_indices(&cards, ""), vec![0, 1]);
    }

    #[test]
    fn search_change_resets_to_first_page() {
        let cards = collection(45);
        let mut state = BrowserState::default();
        state.ensure_indices(&cards);

        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);

        state.set_search("card".to_string());
        assert_eq!(state.current_page(), 1);

        // Re-setting the same text is a no-op.
        state.next_page();
        state.set_search("card".to_string());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn pagination_stops_at_the_ends() {
        let cards = collection(45);
        let mut state = BrowserState::default();
        state.ensure_indices(&cards);

        assert_eq!(state.total_pages(), 3);

        state.prev_page();
        assert_eq!(state.current_page(), 1);

        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.page_indices().len(), 5);
    }

    #[test]
    fn pages_slice_the_filtered_list() {
        let mut cards = collection(30);
        cards.push(card("dragon-1", "Dragon"));

        let mut state = BrowserState::default();
        state.set_search("DRAGON".to_string());
        state.ensure_indices(&cards);

        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_indices(), &[30]);
    }

    #[test]
    fn selection_survives_filter_and_page_changes() {
        let cards = collection(45);
        let mut state = BrowserState::default();
        state.ensure_indices(&cards);

        state.select(cards[3].clone());
        state.set_search("card-01".to_string());
        state.ensure_indices(&cards);
        state.next_page();

        assert_eq!(state.selected().map(|c| c.id.as_str()), Some("card-003"));

        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn collection_change_resets_to_first_page() {
        let cards = collection(45);
        let mut state = BrowserState::default();
        state.ensure_indices(&cards);
        state.next_page();

        state.on_collection_changed();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn stale_indices_are_rebuilt() {
        let cards = collection(10);
        let mut state = BrowserState::default();
        state.ensure_indices(&cards);
        assert_eq!(state.filtered_count(), 10);

        let fewer = collection(4);
        state.ensure_indices(&fewer);
        assert_eq!(state.filtered_count(), 4);
    }

    #[test]
    fn empty_collection_still_reports_one_page() {
        let mut state = BrowserState::default();
        state.ensure_indices(&[]);

        assert_eq!(state.total_pages(), 1);
        assert!(state.page_indices().is_empty());
    }
}
