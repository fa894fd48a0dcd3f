use std::rc::Rc;

use crate::Callback;

/// Presentation and interaction attached to a view.
///
/// `classes` are opaque style hooks for the renderer; the core never reads
/// them. `alpha` and `scale` carry the scroll-linked and hover transforms.
#[derive(Clone, Default)]
pub struct Modifier {
    pub key: Option<String>,
    pub anchor: Option<String>,
    pub classes: Vec<String>,
    pub alpha: Option<f32>,
    pub scale: Option<f32>,
    pub label: Option<String>,
    pub on_click: Option<Callback>,
    pub on_pointer_enter: Option<Callback>,
    pub on_pointer_leave: Option<Callback>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("key", &self.key)
            .field("anchor", &self.anchor)
            .field("classes", &self.classes)
            .field("alpha", &self.alpha)
            .field("scale", &self.scale)
            .field("label", &self.label)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .field(
                "on_pointer_enter",
                &self.on_pointer_enter.as_ref().map(|_| "<callback>"),
            )
            .field(
                "on_pointer_leave",
                &self.on_pointer_leave.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable identity used to route pointer events.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Fragment target (`#anchor`) for in-page links.
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, cond: bool, class: impl Into<String>) -> Self {
        if cond { self.class(class) } else { self }
    }

    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a.clamp(0.0, 1.0));
        self
    }

    pub fn scale(mut self, s: f32) -> Self {
        self.scale = Some(s);
        self
    }

    /// Accessible name for views whose content is not text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn clickable(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn on_pointer_enter(mut self, f: impl Fn() + 'static) -> Self {
        self.on_pointer_enter = Some(Rc::new(f));
        self
    }

    pub fn on_pointer_leave(mut self, f: impl Fn() + 'static) -> Self {
        self.on_pointer_leave = Some(Rc::new(f));
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some() || self.on_pointer_enter.is_some() || self.on_pointer_leave.is_some()
    }
}
