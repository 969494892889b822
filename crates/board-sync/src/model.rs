//! Board Model
//!
//! The in-memory board rendered by the view. Every transition takes `&self`
//! and returns a fresh `Board`, so the view never observes a half-applied
//! update and old snapshots stay valid.

/// A single task item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub text: String,
    pub note: String,
}

impl Card {
    pub fn new(id: impl Into<String>, text: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            note: note.into(),
        }
    }
}

/// A named column of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
    /// Title input is open (view-only)
    pub is_editing: bool,
    /// Action menu is open (view-only)
    pub show_menu: bool,
}

impl List {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
            is_editing: false,
            show_menu: false,
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// Partial update of a list; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub title: Option<String>,
    pub is_editing: Option<bool>,
    /// `Some(true)` also closes every other list's menu
    pub show_menu: Option<bool>,
}

/// Partial update of a card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    pub text: Option<String>,
    pub note: Option<String>,
}

/// Ordered lists of the board currently in view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    pub fn new(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    // ========================
    // Transitions
    // ========================

    /// Replace every list (initial population and reloads)
    pub fn replace_all(&self, lists: Vec<List>) -> Board {
        Board::new(lists)
    }

    /// Apply `patch` to one list
    pub fn patch_list(&self, list_id: &str, patch: &ListPatch) -> Board {
        let opens_menu = patch.show_menu == Some(true);
        let lists = self
            .lists
            .iter()
            .map(|l| {
                let mut next = l.clone();
                if l.id == list_id {
                    if let Some(title) = &patch.title {
                        next.title = title.clone();
                    }
                    if let Some(editing) = patch.is_editing {
                        next.is_editing = editing;
                    }
                    if let Some(show) = patch.show_menu {
                        next.show_menu = show;
                    }
                } else if opens_menu {
                    next.show_menu = false;
                }
                next
            })
            .collect();
        Board::new(lists)
    }

    /// Flip one list's menu; opening it closes all others
    pub fn toggle_menu(&self, list_id: &str) -> Board {
        let open = self.list(list_id).map(|l| !l.show_menu).unwrap_or(false);
        self.patch_list(
            list_id,
            &ListPatch {
                show_menu: Some(open),
                ..Default::default()
            },
        )
    }

    /// Apply `patch` to the card with `card_id`, wherever it lives
    pub fn patch_card(&self, card_id: &str, patch: &CardPatch) -> Board {
        let lists = self
            .lists
            .iter()
            .map(|l| {
                let mut next = l.clone();
                for card in next.cards.iter_mut().filter(|c| c.id == card_id) {
                    if let Some(text) = &patch.text {
                        card.text = text.clone();
                    }
                    if let Some(note) = &patch.note {
                        card.note = note.clone();
                    }
                }
                next
            })
            .collect();
        Board::new(lists)
    }

    /// Drop the list with `list_id`; matches by id, never by position
    pub fn remove_list(&self, list_id: &str) -> Board {
        Board::new(self.lists.iter().filter(|l| l.id != list_id).cloned().collect())
    }

    /// Append `card` to the end of one list
    pub fn append_card(&self, list_id: &str, card: Card) -> Board {
        let lists = self
            .lists
            .iter()
            .map(|l| {
                let mut next = l.clone();
                if l.id == list_id {
                    next.cards.push(card.clone());
                }
                next
            })
            .collect();
        Board::new(lists)
    }

    /// Move a card to the end of another list in one step.
    ///
    /// Returns `None` (nothing to apply) when the lists are the same, either
    /// list is unknown, or the card is not in the source list.
    pub fn move_card(&self, from_list_id: &str, card_id: &str, to_list_id: &str) -> Option<Board> {
        if from_list_id == to_list_id {
            return None;
        }
        let from = self.lists.iter().position(|l| l.id == from_list_id)?;
        let to = self.lists.iter().position(|l| l.id == to_list_id)?;
        let index = self.lists[from].card_index(card_id)?;

        let mut lists = self.lists.clone();
        let card = lists[from].cards.remove(index);
        lists[to].cards.push(card);
        Some(Board::new(lists))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::arb_board;
    use proptest::prelude::*;
    use proptest::sample::Index;

    fn board() -> Board {
        Board::new(vec![
            List::new("a", "Todo").with_cards(vec![
                Card::new("1", "one", ""),
                Card::new("2", "two", "n"),
            ]),
            List::new("b", "Doing").with_cards(vec![Card::new("3", "three", "")]),
            List::new("c", "Done"),
        ])
    }

    fn card_ids(board: &Board, list_id: &str) -> Vec<String> {
        board.list(list_id).unwrap().cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_move_card_is_atomic() {
        let before = board();
        let after = before.move_card("a", "1", "b").unwrap();

        assert_eq!(card_ids(&after, "a"), vec!["2"]);
        assert_eq!(card_ids(&after, "b"), vec!["3", "1"]);
        assert_eq!(after.card_count(), before.card_count());
        let holders = after
            .lists()
            .iter()
            .filter(|l| l.cards.iter().any(|c| c.id == "1"))
            .count();
        assert_eq!(holders, 1);
        // Old snapshot untouched
        assert_eq!(card_ids(&before, "a"), vec!["1", "2"]);
    }

    #[test]
    fn test_move_card_noops() {
        let b = board();
        assert_eq!(b.move_card("a", "1", "a"), None);
        assert_eq!(b.move_card("a", "3", "b"), None);
        assert_eq!(b.move_card("zz", "1", "b"), None);
        assert_eq!(b.move_card("a", "1", "zz"), None);
    }

    #[test]
    fn test_open_menu_closes_others() {
        let b = board().toggle_menu("a").toggle_menu("c");
        assert!(!b.list("a").unwrap().show_menu);
        assert!(!b.list("b").unwrap().show_menu);
        assert!(b.list("c").unwrap().show_menu);

        let b = b.patch_list("b", &ListPatch { show_menu: Some(true), ..Default::default() });
        let open: Vec<&str> = b.lists().iter().filter(|l| l.show_menu).map(|l| l.id.as_str()).collect();
        assert_eq!(open, vec!["b"]);
    }

    #[test]
    fn test_toggle_menu_closes_itself() {
        let b = board().toggle_menu("b").toggle_menu("b");
        assert!(b.lists().iter().all(|l| !l.show_menu));
    }

    #[test]
    fn test_closing_menu_leaves_others() {
        let b = board().toggle_menu("a");
        let b = b.patch_list("c", &ListPatch { show_menu: Some(false), ..Default::default() });
        assert!(b.list("a").unwrap().show_menu);
    }

    #[test]
    fn test_remove_list_by_id() {
        let b = board().remove_list("b");
        let ids: Vec<&str> = b.lists().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(b.remove_list("missing"), b);
    }

    #[test]
    fn test_append_and_patch_card() {
        let b = board().append_card("c", Card::new("9", "nine", ""));
        assert_eq!(card_ids(&b, "c"), vec!["9"]);

        let b = b.patch_card("9", &CardPatch { note: Some("later".into()), ..Default::default() });
        assert_eq!(b.list("c").unwrap().cards[0].note, "later");
        assert_eq!(b.list("c").unwrap().cards[0].text, "nine");

        assert_eq!(board().append_card("missing", Card::new("9", "nine", "")), board());
    }

    proptest! {
        #[test]
        fn prop_move_card_keeps_each_card_in_one_list(
            board in arb_board(),
            from in any::<Index>(),
            card in any::<Index>(),
            to in any::<Index>()
        ) {
            let lists = board.lists();
            let from_list = &lists[from.index(lists.len())];
            let to_id = lists[to.index(lists.len())].id.clone();
            let card_id = if from_list.cards.is_empty() {
                "missing".to_string()
            } else {
                from_list.cards[card.index(from_list.cards.len())].id.clone()
            };

            let moved = board.move_card(&from_list.id, &card_id, &to_id);
            if from_list.id == to_id || from_list.cards.is_empty() {
                prop_assert_eq!(moved, None);
                return Ok(());
            }

            let after = moved.unwrap();
            prop_assert_eq!(after.card_count(), board.card_count());
            let holders: Vec<&str> = after
                .lists()
                .iter()
                .filter(|l| l.cards.iter().any(|c| c.id == card_id))
                .map(|l| l.id.as_str())
                .collect();
            prop_assert_eq!(holders, vec![to_id.as_str()]);
            let target = after.list(&to_id).unwrap();
            prop_assert_eq!(&target.cards.last().unwrap().id, &card_id);
            prop_assert_eq!(after.list(&from_list.id).unwrap().cards.len(), from_list.cards.len() - 1);
            for (before, now) in board.lists().iter().zip(after.lists()) {
                prop_assert_eq!(&before.id, &now.id);
                if before.id != from_list.id && before.id != to_id {
                    prop_assert_eq!(before, now);
                }
            }
        }

        #[test]
        fn prop_opening_a_menu_closes_the_rest(board in arb_board(), pick in any::<Index>()) {
            let target = board.lists()[pick.index(board.lists().len())].id.clone();

            let b = board.patch_list(&target, &ListPatch { show_menu: Some(true), ..Default::default() });
            let open: Vec<&str> = b.lists().iter().filter(|l| l.show_menu).map(|l| l.id.as_str()).collect();
            prop_assert_eq!(open, vec![target.as_str()]);

            let toggled = board.toggle_menu(&target);
            let open = toggled.lists().iter().filter(|l| l.show_menu).count();
            prop_assert!(open <= 1 || !toggled.list(&target).unwrap().show_menu);
        }
    }
}
