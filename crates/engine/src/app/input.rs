use crate::geometry::Vec2;

/// Held actions, sampled once per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Jump,
    Quit,
}

const ACTION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Jump => 4,
            InputAction::Quit => 5,
        }
    }
}

/// One keyboard text-entry event, kept in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Char(char),
    Backspace,
    Submit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
    jump_pressed: bool,
    any_key_pressed: bool,
    cursor_position_px: Option<Vec2>,
    left_click_pressed: bool,
    text_edits: Vec<TextEdit>,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        actions: ActionStates,
        jump_pressed: bool,
        any_key_pressed: bool,
        cursor_position_px: Option<Vec2>,
        left_click_pressed: bool,
        text_edits: Vec<TextEdit>,
    ) -> Self {
        Self {
            quit_requested,
            actions,
            jump_pressed,
            any_key_pressed,
            cursor_position_px,
            left_click_pressed,
            text_edits,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    /// `-1`, `0` or `1`; opposite keys cancel.
    pub fn horizontal_axis(&self) -> i32 {
        axis(
            self.is_down(InputAction::MoveLeft),
            self.is_down(InputAction::MoveRight),
        )
    }

    /// `-1` is up, `1` is down; opposite keys cancel.
    pub fn vertical_axis(&self) -> i32 {
        axis(
            self.is_down(InputAction::MoveUp),
            self.is_down(InputAction::MoveDown),
        )
    }

    /// True only on the tick the jump key went down.
    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn any_key_pressed(&self) -> bool {
        self.any_key_pressed
    }

    pub fn cursor_position_px(&self) -> Option<Vec2> {
        self.cursor_position_px
    }

    pub fn left_click_pressed(&self) -> bool {
        self.left_click_pressed
    }

    /// Cursor position of a left click that started this tick.
    pub fn left_click_at(&self) -> Option<Vec2> {
        if self.left_click_pressed {
            self.cursor_position_px
        } else {
            None
        }
    }

    pub fn text_edits(&self) -> &[TextEdit] {
        &self.text_edits
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_jump_pressed(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        self
    }

    pub fn with_any_key_pressed(mut self, any_key_pressed: bool) -> Self {
        self.any_key_pressed = any_key_pressed;
        self
    }

    pub fn with_left_click(mut self, cursor_px: Vec2) -> Self {
        self.cursor_position_px = Some(cursor_px);
        self.left_click_pressed = true;
        self
    }

    pub fn with_text_edit(mut self, edit: TextEdit) -> Self {
        self.text_edits.push(edit);
        self
    }

    /// Appends one `Char` edit per character, followed by `Submit`.
    pub fn with_submitted_text(mut self, text: &str) -> Self {
        self.text_edits.extend(text.chars().map(TextEdit::Char));
        self.text_edits.push(TextEdit::Submit);
        self
    }
}

fn axis(negative: bool, positive: bool) -> i32 {
    positive as i32 - negative as i32
}
