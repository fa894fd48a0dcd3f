use folio_core::{Interpolate, Keyframes};

use crate::Viewport;

/// Value derived from scroll progress through a keyframe curve.
///
/// Holds no state of its own: every `get` samples the viewport's current
/// progress, so the value moves continuously with scrolling.
#[derive(Clone, Debug)]
pub struct ScrollLinked<T> {
    viewport: Viewport,
    curve: Keyframes<T>,
}

impl<T: Interpolate + Clone> ScrollLinked<T> {
    pub fn new(viewport: &Viewport, curve: Keyframes<T>) -> Self {
        Self {
            viewport: viewport.clone(),
            curve,
        }
    }

    pub fn get(&self) -> T {
        self.curve.sample(self.viewport.progress())
    }

    /// Value at an explicit progress, ignoring the viewport.
    pub fn at(&self, progress: f32) -> T {
        self.curve.sample(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_viewport_progress() {
        let viewport = Viewport::new(1000.0, 2000.0);
        let scale = ScrollLinked::new(&viewport, Keyframes::between((0.0, 1.0f32), (0.5, 1.2)));

        assert_eq!(scale.get(), 1.0);
        viewport.scroll_to(250.0);
        assert!((scale.get() - 1.1).abs() < 1e-5);
        viewport.scroll_to(1000.0);
        assert!((scale.get() - 1.2).abs() < 1e-6);
    }
}
