/// Discrete user input delivered to a mounted page.
///
/// Pointer events address views by the key set with `Modifier::key`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Scroll { y: f32 },
    Resize { viewport_height: f32, content_height: f32 },
    Click { key: String },
    PointerEnter { key: String },
    PointerLeave { key: String },
}

impl InputEvent {
    pub fn click(key: impl Into<String>) -> Self {
        InputEvent::Click { key: key.into() }
    }

    pub fn enter(key: impl Into<String>) -> Self {
        InputEvent::PointerEnter { key: key.into() }
    }

    pub fn leave(key: impl Into<String>) -> Self {
        InputEvent::PointerLeave { key: key.into() }
    }

    pub fn scroll(y: f32) -> Self {
        InputEvent::Scroll { y }
    }

    /// The view key a pointer event targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            InputEvent::Click { key }
            | InputEvent::PointerEnter { key }
            | InputEvent::PointerLeave { key } => Some(key),
            InputEvent::Scroll { .. } | InputEvent::Resize { .. } => None,
        }
    }
}
