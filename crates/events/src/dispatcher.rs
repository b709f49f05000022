//! Background notification dispatcher.
//!
//! Consumes [`DirectoryEvent`]s from the bus and fans each one out to the
//! recipient's enabled channels: an in-app notification row and/or an
//! email. Per-employee preferences gate both the channel and the event
//! category; the default-all-enabled preference row is lazily created on
//! first delivery.
//!
//! Dispatch is fire-and-forget. Every failure in here is logged and
//! swallowed so the operation that published the event is never affected.
//! There is no retry queue and no delivery guarantee.

use sqlx::PgPool;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use smedir_core::channels::{
    NOTIFICATION_ENDORSEMENT, NOTIFICATION_NOMINATION, NOTIFICATION_PROFILE_CHANGE,
};
use smedir_core::types::DbId;
use smedir_db::models::notification::{CreateNotification, NotificationPreference};
use smedir_db::repositories::{EmployeeRepo, NotificationPreferenceRepo, NotificationRepo};

use crate::bus::{DirectoryEvent, EventEnvelope};
use crate::delivery::email::EmailDelivery;

/// The rendered content of one notification, shared by both channels.
struct NotificationCopy {
    notification_type: &'static str,
    title: String,
    message: String,
    /// In-app deep link, relative to the web root.
    link: Option<String>,
    related_id: Option<DbId>,
}

/// Routes directory events to in-app and email notification channels.
pub struct NotificationDispatcher {
    pool: PgPool,
    email: Option<EmailDelivery>,
}

impl NotificationDispatcher {
    pub fn new(pool: PgPool, email: Option<EmailDelivery>) -> Self {
        Self { pool, email }
    }

    /// Run until the bus closes or `cancel` fires.
    pub async fn run(self, mut rx: broadcast::Receiver<EventEnvelope>, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Notification dispatcher shutting down");
                    break;
                }
                received = rx.recv() => match received {
                    Ok(envelope) => self.dispatch(&envelope.event).await,
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "Notification dispatcher lagged; events dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }
    }

    /// Fan one event out to the recipient's enabled channels.
    ///
    /// Never returns an error: all failures are logged here.
    pub async fn dispatch(&self, event: &DirectoryEvent) {
        let recipient_id = event.recipient_id();

        let prefs = match NotificationPreferenceRepo::get_or_create(&self.pool, recipient_id).await
        {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::error!(recipient_id, error = %err, "Failed to load notification preferences");
                return;
            }
        };

        if !category_enabled(&prefs, event) {
            return;
        }

        let copy = render(event);

        if prefs.in_app_enabled {
            let input = CreateNotification {
                employee_id: recipient_id,
                notification_type: copy.notification_type.to_string(),
                title: copy.title.clone(),
                message: copy.message.clone(),
                link: copy.link.clone(),
                related_id: copy.related_id,
            };
            if let Err(err) = NotificationRepo::create(&self.pool, &input).await {
                tracing::error!(recipient_id, error = %err, "Failed to create in-app notification");
            }
        }

        if prefs.email_enabled {
            if let Some(email) = &self.email {
                self.send_email(email, recipient_id, &copy).await;
            }
        }
    }

    async fn send_email(&self, email: &EmailDelivery, recipient_id: DbId, copy: &NotificationCopy) {
        let address = match EmployeeRepo::find_active_by_id(&self.pool, recipient_id).await {
            Ok(Some(employee)) => employee.email,
            Ok(None) => {
                tracing::warn!(recipient_id, "Skipping email for unknown or inactive employee");
                return;
            }
            Err(err) => {
                tracing::error!(recipient_id, error = %err, "Failed to resolve email recipient");
                return;
            }
        };

        let html = format!(
            "<html><body><h2>{}</h2><p>{}</p></body></html>",
            copy.title, copy.message
        );
        let text = format!("{}\n\n{}", copy.title, copy.message);

        if let Err(err) = email.deliver(&address, &copy.title, html, text).await {
            tracing::error!(recipient_id, error = %err, "Failed to send notification email");
        }
    }
}

/// Whether the recipient has the event's category enabled.
fn category_enabled(prefs: &NotificationPreference, event: &DirectoryEvent) -> bool {
    match event {
        DirectoryEvent::EndorsementCreated { .. } => prefs.endorsements_enabled,
        DirectoryEvent::NominationSubmitted { .. } | DirectoryEvent::NominationApproved { .. } => {
            prefs.nominations_enabled
        }
        DirectoryEvent::ProfileStatusChanged { .. } => prefs.profile_changes_enabled,
    }
}

/// Build the user-facing copy for one event.
fn render(event: &DirectoryEvent) -> NotificationCopy {
    match event {
        DirectoryEvent::EndorsementCreated {
            endorser_name,
            endorser_position,
            skill_name,
            endorsement_id,
            comment,
            ..
        } => {
            let who = match endorser_position {
                Some(position) => format!("{endorser_name} ({position})"),
                None => endorser_name.clone(),
            };
            let mut message = format!("{who} endorsed you for {skill_name}.");
            if let Some(comment) = comment {
                message.push_str(&format!(" \"{comment}\""));
            }
            NotificationCopy {
                notification_type: NOTIFICATION_ENDORSEMENT,
                title: format!("New endorsement for {skill_name}"),
                message,
                // The recipient's own profile page.
                link: Some("/profile".to_string()),
                related_id: Some(*endorsement_id),
            }
        }
        DirectoryEvent::NominationSubmitted {
            nominator_name,
            nomination_id,
            ..
        } => NotificationCopy {
            notification_type: NOTIFICATION_NOMINATION,
            title: "You have been nominated as a subject matter expert".to_string(),
            message: format!(
                "{nominator_name} nominated you. Complete your expert profile to accept."
            ),
            link: Some("/profile/new".to_string()),
            related_id: Some(*nomination_id),
        },
        DirectoryEvent::NominationApproved {
            nominee_name,
            nomination_id,
            ..
        } => NotificationCopy {
            notification_type: NOTIFICATION_NOMINATION,
            title: "Your nomination was accepted".to_string(),
            message: format!("{nominee_name} completed their expert profile."),
            link: None,
            related_id: Some(*nomination_id),
        },
        DirectoryEvent::ProfileStatusChanged {
            profile_id, status, ..
        } => NotificationCopy {
            notification_type: NOTIFICATION_PROFILE_CHANGE,
            title: "Your expert profile status changed".to_string(),
            message: format!("A coordinator set your profile status to {status}."),
            link: Some("/profile".to_string()),
            related_id: Some(*profile_id),
        },
    }
}
