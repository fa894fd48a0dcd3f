pub use crate::animation::{Interpolate, Keyframes};
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::input::InputEvent;
pub use crate::modifier::Modifier;
pub use crate::runtime::{Frame, HitRegion, Scheduler};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{Clock, ManualClock, SystemClock, TimerKey, Timers};
pub use crate::view::{Callback, TextStyle, View, ViewId, ViewKind};
