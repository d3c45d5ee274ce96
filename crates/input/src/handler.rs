//! Gesture translation: peg cursor plus a held disc.
//!
//! The terminal has no drag-and-drop, so a move is two presses: grab on the
//! source peg, then grab (drop) on the target peg. [`GrabHandler`] keeps the
//! cursor and the lifted disc between those presses and turns actions into
//! [`Gesture`]s the game can arbitrate.

use crate::types::{DiscId, GameAction, PegId};

/// What the app should ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Lift the top disc of this peg
    PickUp(PegId),
    /// Drop a previously lifted disc
    Drop { disc: DiscId, from: PegId, to: PegId },
    /// The held disc goes back where it came from
    Cancel { disc: DiscId, from: PegId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Held {
    pub disc: DiscId,
    pub from: PegId,
}

#[derive(Debug, Clone)]
pub struct GrabHandler {
    cursor: PegId,
    held: Option<Held>,
}

impl Default for GrabHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GrabHandler {
    pub fn new() -> Self {
        Self {
            cursor: PegId::Source,
            held: None,
        }
    }

    pub fn cursor(&self) -> PegId {
        self.cursor
    }

    pub fn held(&self) -> Option<Held> {
        self.held
    }

    /// Translate a peg action into a gesture.
    ///
    /// Non-peg actions are ignored and yield `None`.
    pub fn handle_action(&mut self, action: GameAction) -> Option<Gesture> {
        match action {
            GameAction::CursorLeft => {
                self.cursor = self.cursor.left();
                None
            }
            GameAction::CursorRight => {
                self.cursor = self.cursor.right();
                None
            }
            GameAction::SelectPeg(peg) => {
                self.cursor = peg;
                Some(self.grab())
            }
            GameAction::Grab => Some(self.grab()),
            GameAction::Cancel => self
                .held
                .take()
                .map(|h| Gesture::Cancel {
                    disc: h.disc,
                    from: h.from,
                }),
            _ => None,
        }
    }

    /// Confirm a pick-up the game accepted
    pub fn hold(&mut self, disc: DiscId, from: PegId) {
        self.held = Some(Held { disc, from });
    }

    /// Forget any held disc and park the cursor on the source peg
    pub fn reset(&mut self) {
        self.held = None;
        self.cursor = PegId::Source;
    }

    fn grab(&mut self) -> Gesture {
        match self.held.take() {
            Some(h) => Gesture::Drop {
                disc: h.disc,
                from: h.from,
                to: self.cursor,
            },
            None => Gesture::PickUp(self.cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_then_grab_is_a_drop() {
        let mut h = GrabHandler::new();
        assert_eq!(
            h.handle_action(GameAction::Grab),
            Some(Gesture::PickUp(PegId::Source))
        );
        h.hold(DiscId(2), PegId::Source);

        assert_eq!(h.handle_action(GameAction::CursorRight), None);
        assert_eq!(h.handle_action(GameAction::CursorRight), None);
        assert_eq!(
            h.handle_action(GameAction::Grab),
            Some(Gesture::Drop {
                disc: DiscId(2),
                from: PegId::Source,
                to: PegId::Destination,
            })
        );
        assert_eq!(h.held(), None);
    }

    #[test]
    fn select_peg_moves_cursor_and_grabs() {
        let mut h = GrabHandler::new();
        assert_eq!(
            h.handle_action(GameAction::SelectPeg(PegId::Auxiliary)),
            Some(Gesture::PickUp(PegId::Auxiliary))
        );
        h.hold(DiscId(0), PegId::Auxiliary);
        assert_eq!(
            h.handle_action(GameAction::SelectPeg(PegId::Auxiliary)),
            Some(Gesture::Drop {
                disc: DiscId(0),
                from: PegId::Auxiliary,
                to: PegId::Auxiliary,
            })
        );
    }

    #[test]
    fn rejected_pick_up_holds_nothing() {
        let mut h = GrabHandler::new();
        h.handle_action(GameAction::Grab);
        // Game refused, so no hold() call; the next grab is another pick-up.
        assert_eq!(
            h.handle_action(GameAction::Grab),
            Some(Gesture::PickUp(PegId::Source))
        );
    }

    #[test]
    fn cancel_releases_held_disc() {
        let mut h = GrabHandler::new();
        assert_eq!(h.handle_action(GameAction::Cancel), None);
        h.hold(DiscId(1), PegId::Source);
        assert_eq!(
            h.handle_action(GameAction::Cancel),
            Some(Gesture::Cancel {
                disc: DiscId(1),
                from: PegId::Source,
            })
        );
        assert_eq!(h.held(), None);
    }

    #[test]
    fn cursor_saturates_and_resets() {
        let mut h = GrabHandler::new();
        h.handle_action(GameAction::CursorLeft);
        assert_eq!(h.cursor(), PegId::Source);
        for _ in 0..5 {
            h.handle_action(GameAction::CursorRight);
        }
        assert_eq!(h.cursor(), PegId::Destination);
        h.hold(DiscId(0), PegId::Destination);
        h.reset();
        assert_eq!(h.cursor(), PegId::Source);
        assert_eq!(h.held(), None);
        assert_eq!(h.handle_action(GameAction::Solve), None);
    }
}
