//! # State, Scopes, and Timers
//!
//! Folio pages are plain structs that own a handful of reactive values and
//! rebuild a `View` tree from them on demand. The core provides:
//!
//! - `Signal<T>`: observable value with explicit subscriptions.
//! - `Scope` / `effect`: lifecycle owner for subscriptions and timers.
//! - `Timers`: interval timers driven by an injectable `Clock`.
//! - `Keyframes<T>`: piecewise-linear mapping used for scroll-linked values.
//!
//! ## Signals
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! `observe` registers a subscriber and hands back a `Dispose` guard. Running
//! the guard removes the subscriber, so nothing keeps listening after the
//! owner is gone:
//!
//! ```rust
//! use folio_core::*;
//!
//! let offset = signal(0.0f32);
//! let guard = offset.observe(|y| log::trace!("scrolled to {y}"));
//! assert_eq!(offset.subscriber_count(), 1);
//! guard.run();
//! assert_eq!(offset.subscriber_count(), 0);
//! ```
//!
//! ## Effects and cleanup
//!
//! `effect` runs its closure immediately and, when called inside
//! `Scope::run`, registers the returned `Dispose` with that scope. Disposing
//! the scope (a page unmount) runs every cleanup exactly once.
//!
//! ```rust
//! use folio_core::*;
//!
//! let scope = Scope::named("example");
//! scope.run(|| {
//!     effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose();
//! ```
//!
//! ## Timers
//!
//! Timers never fire on their own. The event loop calls `Timers::poll`, which
//! reads the installed clock and runs every callback that came due since the
//! previous poll. Tests install a `ManualClock` and advance it explicitly.

pub mod animation;
pub mod effects;
pub mod input;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod timer;
pub mod view;

pub use animation::*;
pub use effects::*;
pub use input::*;
pub use modifier::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use timer::*;
pub use view::*;
