//! # Rotating showcase
//!
//! A `Carousel` cycles through a fixed number of slides, wrapping at both
//! ends. `start` registers an interval timer that advances one slide per
//! period; the returned `Dispose` (also registered with the current scope)
//! cancels it, after which no tick can change the index.
//!
//! Manual `next` / `prev` / `go_to` restart the period, so a click and an
//! automatic advance never land within the same period.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::*;
use web_time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Carousel {
    len: usize,
    interval: Duration,
    index: Signal<usize>,
    timers: Timers,
    timer: Rc<Cell<Option<TimerKey>>>,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, timers: &Timers) -> Self {
        Self {
            len,
            interval,
            index: signal(0),
            timers: timers.clone(),
            timer: Rc::new(Cell::new(None)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn current(&self) -> usize {
        self.index.get()
    }

    pub fn signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    pub fn is_running(&self) -> bool {
        self.timer.get().is_some_and(|k| self.timers.is_active(k))
    }

    /// Starts auto-advance. Calling it while running restarts the period.
    pub fn start(&self) -> Dispose {
        if self.len < 2 {
            log::debug!("carousel with {} slide(s); auto-advance disabled", self.len);
            return Dispose::noop();
        }
        if let Some(key) = self.timer.take() {
            self.timers.cancel(key);
        }

        effect(|| {
            let index = self.index.clone();
            let len = self.len;
            let key = self.timers.set_interval(self.interval, move || {
                index.update(|i| *i = (*i + 1) % len);
            });
            self.timer.set(Some(key));

            let timers = self.timers.clone();
            let slot = self.timer.clone();
            on_unmount(move || {
                if slot.get() == Some(key) {
                    slot.set(None);
                }
                timers.cancel(key);
            })
        })
    }

    pub fn stop(&self) {
        if let Some(key) = self.timer.take() {
            self.timers.cancel(key);
        }
    }

    pub fn next(&self) {
        if self.len == 0 {
            return;
        }
        self.index.update(|i| *i = (*i + 1) % self.len);
        self.restart_period();
    }

    pub fn prev(&self) {
        if self.len == 0 {
            return;
        }
        self.index.update(|i| *i = (*i + self.len - 1) % self.len);
        self.restart_period();
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn go_to(&self, index: usize) {
        if index >= self.len {
            log::debug!("ignoring go_to({index}) on carousel of {}", self.len);
            return;
        }
        self.index.set_if_changed(index);
        self.restart_period();
    }

    fn restart_period(&self) {
        if let Some(key) = self.timer.get() {
            self.timers.restart(key);
        }
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("len", &self.len)
            .field("index", &self.current())
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}
