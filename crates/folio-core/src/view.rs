use crate::Modifier;
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

/// Typographic role of a text run; the renderer maps it to markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Brand,
    Display,
    Heading,
    Title,
    Body,
    Caption,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Page,
    Header,
    Nav,
    Main,
    Section,
    Footer,
    Box,
    Row,
    Column,
    Grid {
        columns: u8,
    },
    List,
    ListItem,
    Card,
    Text {
        text: String,
        style: TextStyle,
    },
    /// `src` is an opaque asset reference, passed through untouched.
    Image {
        src: String,
        alt: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    Link {
        href: String,
        label: String,
    },
    Button {
        label: String,
    },
    /// Modal overlay; children are only presented while `open`.
    Dialog {
        open: bool,
        title: String,
    },
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.modifier.key.as_deref()
    }

    /// Depth-first, parent before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find(&self, key: &str) -> Option<&View> {
        if self.key() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// All text under this view, in document order.
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |v| match &v.kind {
            ViewKind::Text { text, .. } => out.push(text.as_str()),
            ViewKind::Link { label, .. } | ViewKind::Button { label } => out.push(label.as_str()),
            _ => {}
        });
        out
    }
}
