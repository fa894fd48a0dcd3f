#![allow(non_snake_case)]
//! Widgets, interaction state and HTML output.
//!
//! Widget functions only build `View` values; they hold no state. State that
//! survives between frames lives in the small handles of this crate
//! (`Viewport`, `Selection`, `Hover`, `Carousel`), which pages own and clone
//! into event callbacks.

pub mod anim;
pub mod carousel;
pub mod hover;
pub mod html;
pub mod scroll;
pub mod selection;

pub use anim::ScrollLinked;
pub use carousel::Carousel;
pub use hover::Hover;
pub use scroll::{ScrollThreshold, Viewport};
pub use selection::{Selection, SelectionPolicy};

use folio_core::*;

pub fn Page(modifier: Modifier) -> View {
    View::new(0, ViewKind::Page).modifier(modifier)
}

pub fn Header(modifier: Modifier) -> View {
    View::new(0, ViewKind::Header).modifier(modifier)
}

pub fn Nav(modifier: Modifier) -> View {
    View::new(0, ViewKind::Nav).modifier(modifier)
}

pub fn Main(modifier: Modifier) -> View {
    View::new(0, ViewKind::Main).modifier(modifier)
}

/// Page section addressable as `#anchor`.
pub fn Section(anchor: impl Into<String>, modifier: Modifier) -> View {
    View::new(0, ViewKind::Section).modifier(modifier.anchor(anchor))
}

pub fn Footer(modifier: Modifier) -> View {
    View::new(0, ViewKind::Footer).modifier(modifier)
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Grid(columns: u8, modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Grid {
            columns: columns.max(1),
        },
    )
    .modifier(modifier)
}

/// Unordered list; each child is wrapped in a list item.
pub fn List(modifier: Modifier, items: Vec<View>) -> View {
    View::new(0, ViewKind::List).modifier(modifier).with_children(
        items
            .into_iter()
            .map(|item| View::new(0, ViewKind::ListItem).with_children(vec![item]))
            .collect(),
    )
}

pub fn Card(modifier: Modifier) -> View {
    View::new(0, ViewKind::Card).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            style: TextStyle::Body,
        },
    )
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Image {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
        },
    )
}

pub fn Link(href: impl Into<String>, label: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Link {
            href: href.into(),
            label: label.into(),
        },
    )
}

pub fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            label: label.into(),
        },
    )
    .modifier(Modifier::new().clickable(on_click))
}

pub fn Dialog(open: bool, title: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Dialog {
            open,
            title: title.into(),
        },
    )
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
    /// Merge `m` into the existing modifier, keeping handlers already set.
    fn with(self, m: Modifier) -> Self;
    fn style(self, style: TextStyle) -> Self;
    fn size(self, width: u32, height: u32) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        let mut v = self;
        v.children.extend(children.into_children());
        v
    }

    fn with(mut self, m: Modifier) -> Self {
        let base = &mut self.modifier;
        base.key = m.key.or(base.key.take());
        base.anchor = m.anchor.or(base.anchor.take());
        base.classes.extend(m.classes);
        base.alpha = m.alpha.or(base.alpha);
        base.scale = m.scale.or(base.scale);
        base.label = m.label.or(base.label.take());
        base.on_click = m.on_click.or(base.on_click.take());
        base.on_pointer_enter = m.on_pointer_enter.or(base.on_pointer_enter.take());
        base.on_pointer_leave = m.on_pointer_leave.or(base.on_pointer_leave.take());
        self
    }

    fn style(mut self, style: TextStyle) -> Self {
        if let ViewKind::Text { style: s, .. } = &mut self.kind {
            *s = style;
        }
        self
    }

    fn size(mut self, w: u32, h: u32) -> Self {
        if let ViewKind::Image { width, height, .. } = &mut self.kind {
            *width = Some(w);
            *height = Some(h);
        }
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
