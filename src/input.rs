use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// One user intent, whether it arrived from the keyboard or a click on an
/// on-screen button. Both paths dispatch through the same handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Left,
    Right,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Restart,
}

pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Up => Some(Action::Rotate),
        KeyCode::Down => Some(Action::SoftDrop),
        KeyCode::Char(' ') => Some(Action::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Pause),
        KeyCode::Enter => Some(Action::Restart),
        _ => None,
    }
}

/// Screen regions of the clickable buttons, rebuilt by the renderer each
/// frame and hit-tested against mouse clicks.
#[derive(Default)]
pub struct TouchButtons {
    buttons: Vec<(Rect, Action)>,
}

impl TouchButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    pub fn push(&mut self, rect: Rect, action: Action) {
        self.buttons.push((rect, action));
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        self.buttons
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, action)| *action)
    }
}
