use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::Dispose;

// Clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically.
#[derive(Debug)]
pub struct ManualClock {
    t: Cell<Instant>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

new_key_type! {
    pub struct TimerKey;
}

/// Shortest period accepted by `Timers::interval`.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

struct TimerEntry {
    period: Duration,
    next_due: Instant,
    callback: Rc<dyn Fn()>,
}

/// Interval timers polled by the event loop.
///
/// Nothing runs in the background: callbacks fire only from `poll`, in due
/// order, once per elapsed period. A cancelled timer never fires again, even
/// when it was already due.
#[derive(Clone)]
pub struct Timers {
    clock: Rc<dyn Clock>,
    entries: Rc<RefCell<SlotMap<TimerKey, TimerEntry>>>,
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Rc::new(RefCell::new(SlotMap::with_key())),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Registers `f` to run every `period`, first after one full period.
    pub fn set_interval(&self, period: Duration, f: impl Fn() + 'static) -> TimerKey {
        let period = period.max(MIN_PERIOD);
        let key = self.entries.borrow_mut().insert(TimerEntry {
            period,
            next_due: self.now() + period,
            callback: Rc::new(f),
        });
        log::debug!("timer {key:?} registered every {period:?}");
        key
    }

    /// Like `set_interval`, returning a guard that cancels the timer.
    pub fn interval(&self, period: Duration, f: impl Fn() + 'static) -> Dispose {
        let key = self.set_interval(period, f);
        let timers = self.clone();
        Dispose::new(move || {
            timers.cancel(key);
        })
    }

    pub fn cancel(&self, key: TimerKey) -> bool {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            log::debug!("timer {key:?} cancelled");
        }
        removed
    }

    /// Pushes the next deadline a full period past now.
    pub fn restart(&self, key: TimerKey) -> bool {
        let now = self.now();
        match self.entries.borrow_mut().get_mut(key) {
            Some(entry) => {
                entry.next_due = now + entry.period;
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, key: TimerKey) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.borrow().values().map(|e| e.next_due).min()
    }

    /// Fires every callback due at the clock's current time. Returns how many
    /// callbacks ran.
    pub fn poll(&self) -> usize {
        let now = self.now();
        let mut fired = 0;
        loop {
            // Pick the earliest due entry, reschedule it, then call it with
            // the map unborrowed so the callback may cancel or register timers.
            let due = {
                let mut entries = self.entries.borrow_mut();
                let earliest = entries
                    .iter()
                    .filter(|(_, e)| e.next_due <= now)
                    .min_by_key(|(_, e)| e.next_due)
                    .map(|(k, _)| k);
                earliest.and_then(|key| {
                    let entry = entries.get_mut(key)?;
                    entry.next_due += entry.period;
                    Some(entry.callback.clone())
                })
            };
            match due {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        fired
    }
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timers")
            .field("active", &self.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
