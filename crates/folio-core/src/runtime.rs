use crate::{Callback, InputEvent, View, ViewId};

/// Pointer handlers of one keyed view.
#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub key: String,
    pub on_click: Option<Callback>,
    pub on_pointer_enter: Option<Callback>,
    pub on_pointer_leave: Option<Callback>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("click", &self.on_click.is_some())
            .field("enter", &self.on_pointer_enter.is_some())
            .field("leave", &self.on_pointer_leave.is_some())
            .finish()
    }
}

/// Output of composition: the view tree plus its hit regions.
#[derive(Debug)]
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    pub fn region(&self, key: &str) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|r| r.key == key)
    }

    /// Routes a pointer event to the handler registered under its key.
    ///
    /// Returns `false` when nothing handled it: scroll/resize events, unknown
    /// keys, or a keyed view without a handler for that event.
    pub fn dispatch(&self, event: &InputEvent) -> bool {
        let Some(key) = event.target() else {
            return false;
        };
        let handler = self.region(key).and_then(|r| match event {
            InputEvent::Click { .. } => r.on_click.clone(),
            InputEvent::PointerEnter { .. } => r.on_pointer_enter.clone(),
            InputEvent::PointerLeave { .. } => r.on_pointer_leave.clone(),
            InputEvent::Scroll { .. } | InputEvent::Resize { .. } => None,
        });
        match handler {
            Some(h) => {
                h();
                true
            }
            None => {
                log::warn!("no handler for {event:?}; ignoring");
                false
            }
        }
    }
}

pub struct Scheduler {
    next_id: ViewId,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn id(&mut self) -> ViewId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Builds the tree, numbers it depth-first from 1 and collects hit regions.
    ///
    /// Numbering restarts for every frame, so an unchanged tree keeps its ids.
    pub fn compose(&mut self, build_root: impl FnOnce() -> View) -> Frame {
        self.next_id = 1;
        let mut root = build_root();
        self.assign_ids(&mut root);

        let mut hit_regions = Vec::new();
        root.walk(&mut |v| {
            let m = &v.modifier;
            if let Some(key) = &m.key
                && m.is_interactive()
            {
                hit_regions.push(HitRegion {
                    id: v.id,
                    key: key.clone(),
                    on_click: m.on_click.clone(),
                    on_pointer_enter: m.on_pointer_enter.clone(),
                    on_pointer_leave: m.on_pointer_leave.clone(),
                });
            }
        });

        Frame { root, hit_regions }
    }

    fn assign_ids(&mut self, v: &mut View) {
        v.id = self.id();
        for c in &mut v.children {
            self.assign_ids(c);
        }
    }
}
