//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`DirectoryEvent`]s. It is
//! shared via `Arc<EventBus>` across the application; mutating operations
//! publish after their transaction commits and never wait on delivery.

use serde::Serialize;
use smedir_core::types::{DbId, Timestamp};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// DirectoryEvent
// ---------------------------------------------------------------------------

/// A domain event emitted by a directory operation.
///
/// Events carry everything the dispatcher needs to build notification copy
/// so it never has to re-query the triggering operation's state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum DirectoryEvent {
    /// A peer endorsed a skill on an SME's profile.
    EndorsementCreated {
        /// The profile owner who receives the notification.
        sme_employee_id: DbId,
        endorser_name: String,
        endorser_position: Option<String>,
        skill_name: String,
        endorsement_id: DbId,
        comment: Option<String>,
    },
    /// A team leader nominated an employee.
    NominationSubmitted {
        nominee_id: DbId,
        nominator_name: String,
        nomination_id: DbId,
    },
    /// A nominee completed their profile; the nomination is approved.
    NominationApproved {
        nominator_id: DbId,
        nominee_name: String,
        nomination_id: DbId,
    },
    /// A coordinator changed a profile's status.
    ProfileStatusChanged {
        owner_employee_id: DbId,
        profile_id: DbId,
        status: String,
    },
}

impl DirectoryEvent {
    /// The employee this event should notify.
    pub fn recipient_id(&self) -> DbId {
        match self {
            Self::EndorsementCreated {
                sme_employee_id, ..
            } => *sme_employee_id,
            Self::NominationSubmitted { nominee_id, .. } => *nominee_id,
            Self::NominationApproved { nominator_id, .. } => *nominator_id,
            Self::ProfileStatusChanged {
                owner_employee_id, ..
            } => *owner_employee_id,
        }
    }
}

/// When an event was published; carried alongside the event on the bus.
#[derive(Debug, Clone, Serialize)]
pub struct EventEnvelope {
    #[serde(flatten)]
    pub event: DirectoryEvent,
    pub timestamp: Timestamp,
}

impl EventEnvelope {
    pub fn new(event: DirectoryEvent) -> Self {
        Self {
            event,
            timestamp: chrono::Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`DirectoryEvent`].
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// notifications are a UX nicety, not a correctness-critical path.
    pub fn publish(&self, event: DirectoryEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(EventEnvelope::new(event));
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
