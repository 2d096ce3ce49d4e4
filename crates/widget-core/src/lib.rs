//! Session runtime for the chat widget.
//!
//! A [`ChatSession`] owns the two input streams, typed messages and raw
//! transcript fragments, and recomputes the merged conversation through
//! `plum-reconcile` after every append. The embedding shell implements
//! [`WidgetRuntime`] to receive lifecycle, data, and error events; it never
//! reads session internals directly.

mod clock;
mod events;
mod runtime;
mod session;
mod state;

pub use clock::{Clock, SystemClock};
pub use events::{SessionDataEvent, SessionErrorEvent, SessionLifecycleEvent};
pub use runtime::WidgetRuntime;
pub use session::{ChatSession, EMPTY_REPLY, SEND_FAILURE_REPLY};
pub use state::WidgetState;
