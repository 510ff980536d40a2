/// Pointer events with document coordinates (terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed.
    Down { x: u16, y: u16, button: MouseButton },
    /// Pointer moved, with or without a button held.
    Move { x: u16, y: u16 },
    /// Button released.
    Up { x: u16, y: u16, button: MouseButton },
}

impl PointerEvent {
    pub fn x(&self) -> u16 {
        match self {
            PointerEvent::Down { x, .. } | PointerEvent::Move { x, .. } | PointerEvent::Up { x, .. } => *x,
        }
    }

    pub fn y(&self) -> u16 {
        match self {
            PointerEvent::Down { y, .. } | PointerEvent::Move { y, .. } | PointerEvent::Up { y, .. } => *y,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A native copy event.
///
/// Handlers that take over the copy fill in the plain-text payload and mark
/// the default action prevented; an untouched event means the platform's own
/// copy behavior should run.
#[derive(Debug, Clone, Default)]
pub struct CopyEvent {
    payload: Option<String>,
    default_prevented: bool,
}

impl CopyEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payload(&mut self, text: impl Into<String>) {
        self.payload = Some(text.into());
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

// Conversion from crossterm types
impl From<crossterm::event::MouseEvent> for PointerEvent {
    fn from(event: crossterm::event::MouseEvent) -> Self {
        use crossterm::event::MouseEventKind;
        match event.kind {
            MouseEventKind::Down(button) => PointerEvent::Down {
                x: event.column,
                y: event.row,
                button: button.into(),
            },
            MouseEventKind::Up(button) => PointerEvent::Up {
                x: event.column,
                y: event.row,
                button: button.into(),
            },
            // Scroll and any future kinds degrade to plain movement
            _ => PointerEvent::Move {
                x: event.column,
                y: event.row,
            },
        }
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
