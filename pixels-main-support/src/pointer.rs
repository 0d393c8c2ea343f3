use life_grid::Command;
use winit::event::MouseButton;

/// Mouse state. Holding the left button paints live cells; holding the right
/// button pauses the simulation until it is let go.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer {
    x: f64,
    y: f64,
    left_down: bool,
    right_down: bool,
}

impl Pointer {
    #[cfg(test)]
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn moved(&mut self, x: f64, y: f64) -> Option<Command> {
        self.x = x;
        self.y = y;
        self.left_down.then(|| self.spawn_here())
    }

    pub fn pressed(&mut self, button: MouseButton) -> Option<Command> {
        match button {
            MouseButton::Left => {
                self.left_down = true;
                Some(self.spawn_here())
            }
            MouseButton::Right => {
                self.right_down = true;
                Some(Command::SetPaused(true))
            }
            _ => None,
        }
    }

    pub fn released(&mut self, button: MouseButton) -> Option<Command> {
        match button {
            MouseButton::Left => {
                self.left_down = false;
                None
            }
            MouseButton::Right => {
                self.right_down = false;
                Some(Command::SetPaused(false))
            }
            _ => None,
        }
    }

    /// Forgets held buttons, e.g. when the cursor leaves the window.
    pub fn release_all(&mut self) -> Option<Command> {
        self.left_down = false;
        if self.right_down {
            self.right_down = false;
            Some(Command::SetPaused(false))
        } else {
            None
        }
    }

    fn spawn_here(&self) -> Command {
        Command::SpawnAtPoint {
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_without_buttons_does_nothing() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.moved(10.0, 20.0), None);
        assert_eq!(pointer.position(), (10.0, 20.0));
    }

    #[test]
    fn left_drag_spawns_along_the_way() {
        let mut pointer = Pointer::default();
        pointer.moved(6.0, 6.0);
        assert_eq!(
            pointer.pressed(MouseButton::Left),
            Some(Command::SpawnAtPoint { x: 6.0, y: 6.0 })
        );
        assert_eq!(
            pointer.moved(15.0, 6.0),
            Some(Command::SpawnAtPoint { x: 15.0, y: 6.0 })
        );
        assert_eq!(pointer.released(MouseButton::Left), None);
        assert_eq!(pointer.moved(24.0, 6.0), None);
    }

    #[test]
    fn right_button_holds_pause() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.pressed(MouseButton::Right), Some(Command::SetPaused(true)));
        assert_eq!(pointer.moved(1.0, 1.0), None);
        assert_eq!(pointer.released(MouseButton::Right), Some(Command::SetPaused(false)));
    }

    #[test]
    fn release_all_resumes_only_if_paused_by_pointer() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.release_all(), None);

        pointer.pressed(MouseButton::Left);
        pointer.pressed(MouseButton::Right);
        assert_eq!(pointer.release_all(), Some(Command::SetPaused(false)));
        assert_eq!(pointer.moved(3.0, 3.0), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut pointer = Pointer::default();
        assert_eq!(pointer.pressed(MouseButton::Middle), None);
        assert_eq!(pointer.released(MouseButton::Middle), None);
    }
}
