//! Event bus and notification infrastructure for the SME directory.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DirectoryEvent`] — the typed domain events the directory emits.
//! - [`NotificationDispatcher`] — background consumer that fans events out
//!   to in-app notification rows and email, gated by per-employee
//!   preferences. Delivery is best-effort: failures are logged and
//!   swallowed, never surfaced to the operation that published the event.
//! - [`delivery`] — the SMTP email channel.

pub mod bus;
pub mod delivery;
pub mod dispatcher;

pub use bus::{DirectoryEvent, EventBus};
pub use delivery::email::{EmailConfig, EmailDelivery};
pub use dispatcher::NotificationDispatcher;
