//! Chest interaction: closed, targeted for opening, or opened for good.

use crate::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestState {
    Closed,
    /// The player is in range and this is the one chest the action key
    /// would open.
    ActiveTarget,
    /// Terminal: the reveal effect plays once and the chest never reopens.
    Opening,
}

#[derive(Debug, Clone)]
pub struct Chest {
    pub pos: Vec2,
    pub state: ChestState,
    /// True while the one-shot reveal effect is on screen; cleared by the
    /// scheduled reveal task.
    pub reveal_active: bool,
}

impl Chest {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            state: ChestState::Closed,
            reveal_active: false,
        }
    }

    /// Only a closed chest can become the active target.
    pub fn is_targetable(&self) -> bool {
        self.state == ChestState::Closed
    }

    pub fn set_targeted(&mut self) {
        if self.state == ChestState::Closed {
            self.state = ChestState::ActiveTarget;
        }
    }

    /// Player walked out of range without opening.
    pub fn revert(&mut self) {
        if self.state == ChestState::ActiveTarget {
            self.state = ChestState::Closed;
        }
    }

    /// Opens a targeted chest and starts the reveal effect. Returns false
    /// when the chest is not the active target (already open, or closed),
    /// making a repeated open action a no-op.
    pub fn open(&mut self) -> bool {
        if self.state != ChestState::ActiveTarget {
            return false;
        }
        self.state = ChestState::Opening;
        self.reveal_active = true;
        true
    }

    /// Ends the reveal effect (scheduled task).
    pub fn finish_reveal(&mut self) {
        self.reveal_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_and_revert_cycle() {
        let mut chest = Chest::new(Vec2::ZERO);
        assert!(chest.is_targetable());

        chest.set_targeted();
        assert_eq!(chest.state, ChestState::ActiveTarget);

        chest.revert();
        assert_eq!(chest.state, ChestState::Closed);
        assert!(chest.is_targetable());
    }

    #[test]
    fn test_open_requires_active_target() {
        let mut chest = Chest::new(Vec2::ZERO);
        assert!(!chest.open());
        assert_eq!(chest.state, ChestState::Closed);

        chest.set_targeted();
        assert!(chest.open());
        assert_eq!(chest.state, ChestState::Opening);
        assert!(chest.reveal_active);
    }

    #[test]
    fn test_opening_is_terminal() {
        let mut chest = Chest::new(Vec2::ZERO);
        chest.set_targeted();
        chest.open();

        // No path back: reopen, retarget and revert are all no-ops
        assert!(!chest.open());
        chest.set_targeted();
        assert_eq!(chest.state, ChestState::Opening);
        chest.revert();
        assert_eq!(chest.state, ChestState::Opening);
        assert!(!chest.is_targetable());
    }

    #[test]
    fn test_finish_reveal_clears_effect() {
        let mut chest = Chest::new(Vec2::ZERO);
        chest.set_targeted();
        chest.open();
        chest.finish_reveal();
        assert!(!chest.reveal_active);
        assert_eq!(chest.state, ChestState::Opening);
    }
}
