/// Board held in a Yew reducer so async handlers always update the latest board

use crate::board::{Board, BoardAction, BoardSink};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for Board {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl BoardSink for UseReducerHandle<Board> {
    fn apply(&self, action: BoardAction) {
        self.dispatch(action);
    }

    fn contains_extension(&self, extension_id: &str) -> bool {
        self.extension(extension_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension_data::ExtensionRecord;
    use crate::storage::{Categories, ExtensionStates};

    fn create_test_board() -> Rc<Board> {
        Rc::new(Board::new())
            .reduce(BoardAction::Columns(Categories::from_labels(["enabled", "disabled"])))
            .reduce(BoardAction::Extensions {
                extensions: vec![
                    ExtensionRecord::new("a", "Alpha", true),
                    ExtensionRecord::new("b", "Beta", true),
                ],
                states: ExtensionStates::new(),
                self_id: "self".to_string(),
            })
    }

    #[test]
    fn test_two_toggles_dispatched_in_turn_both_stick() {
        let board = create_test_board()
            .reduce(BoardAction::Toggled {
                extension_id: "a".to_string(),
                enabled: false,
            })
            .reduce(BoardAction::Toggled {
                extension_id: "b".to_string(),
                enabled: false,
            });

        assert_eq!(board.card_column("a"), Some("disabled"));
        assert_eq!(board.card_column("b"), Some("disabled"));
        assert!(!board.extension("a").unwrap().enabled);
        assert!(!board.extension("b").unwrap().enabled);
    }

    #[test]
    fn test_reduce_leaves_previous_board_untouched() {
        let before = create_test_board();

        let after = before.clone().reduce(BoardAction::Moved {
            extension_id: "a".to_string(),
            status: "disabled".to_string(),
        });

        assert_eq!(before.card_column("a"), Some("enabled"));
        assert_eq!(after.card_column("a"), Some("disabled"));
    }
}
