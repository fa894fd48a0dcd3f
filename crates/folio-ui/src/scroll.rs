//! # Viewport scroll
//!
//! The window's scroll offset is owned by the platform, not by pages. The
//! platform writes it into a `Viewport`; pages only read it, either directly
//! (`offset`, `progress`) or by subscribing with `on_scroll`, which hands back
//! a `Dispose` guard that removes the listener.
//!
//! `ScrollThreshold` is the one subscriber the site needs: a boolean that
//! flips when the offset crosses a fixed number of pixels.
//!
//! ```rust
//! use folio_ui::{ScrollThreshold, Viewport};
//!
//! let viewport = Viewport::new(800.0, 4000.0);
//! let header = ScrollThreshold::attach(&viewport, 50.0);
//!
//! viewport.scroll_to(51.0);
//! assert!(header.is_scrolled());
//!
//! header.detach();
//! assert_eq!(viewport.listener_count(), 0);
//! ```

use folio_core::*;

/// Scroll position and extents of the page viewport.
#[derive(Clone, Debug)]
pub struct Viewport {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Viewport {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(sanitize(viewport_height)),
            content_height: signal(sanitize(content_height)),
        }
    }

    pub fn resize(&self, viewport_height: f32, content_height: f32) {
        self.viewport_height.set(sanitize(viewport_height));
        self.content_height.set(sanitize(content_height));
    }

    /// Records a new scroll offset. Negative and non-finite offsets read as 0.
    pub fn scroll_to(&self, y: f32) {
        self.scroll_offset.set(sanitize(y));
    }

    pub fn scroll_by(&self, dy: f32) {
        self.scroll_to(self.offset() + dy);
    }

    pub fn offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Largest offset the content allows.
    pub fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    /// Offset as a fraction of the scrollable distance, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset() / max).clamp(0.0, 1.0)
    }

    /// Registers a scroll listener. Running the guard unregisters it.
    pub fn on_scroll(&self, f: impl Fn(f32) + 'static) -> Dispose {
        self.scroll_offset.observe(move |y| f(*y))
    }

    pub fn listener_count(&self) -> usize {
        self.scroll_offset.subscriber_count()
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// `true` once the offset is strictly past `threshold` pixels.
pub fn past_threshold(offset: f32, threshold: f32) -> bool {
    offset > threshold
}

/// Boolean view of the scroll offset crossing a pixel threshold.
///
/// Seeded from the viewport's offset at attach time and updated on every
/// scroll event after that, so it always agrees with the current offset.
pub struct ScrollThreshold {
    threshold: f32,
    scrolled: Signal<bool>,
    subscription: Dispose,
}

impl ScrollThreshold {
    /// Subscribes to `viewport`. Inside `Scope::run` the subscription is also
    /// released when the scope is disposed.
    pub fn attach(viewport: &Viewport, threshold: f32) -> Self {
        let scrolled = signal(past_threshold(viewport.offset(), threshold));
        let subscription = effect(|| {
            let scrolled = scrolled.clone();
            viewport.on_scroll(move |y| {
                scrolled.set_if_changed(past_threshold(y, threshold));
            })
        });
        Self {
            threshold,
            scrolled,
            subscription,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn signal(&self) -> Signal<bool> {
        self.scrolled.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_pending()
    }

    /// Stops listening and resets to `false`.
    pub fn detach(&self) {
        self.subscription.run();
        self.scrolled.set_if_changed(false);
    }
}
