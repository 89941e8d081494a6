//! Per-frame input snapshot supplied by the embedding engine.

/// Movement keys held this frame plus the action edge (just pressed).
/// The action either opens the targeted chest or throws a knife.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub action_pressed: bool,
}

impl InputState {
    /// Raw movement axes in {-1, 0, 1}.
    pub fn axes(&self) -> (f64, f64) {
        let x = (self.right as i8 - self.left as i8) as f64;
        let y = (self.down as i8 - self.up as i8) as f64;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        let input = InputState {
            left: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.axes(), (-1.0, 1.0));

        let both = InputState {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(both.axes(), (0.0, 0.0));
    }
}
