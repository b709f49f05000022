//! Database integration tests for the notification dispatcher.
//!
//! Email delivery is left disabled (no SMTP config); these tests cover
//! the in-app channel and the preference gates.

use sqlx::PgPool;
use smedir_core::types::DbId;
use smedir_db::repositories::{NotificationPreferenceRepo, NotificationRepo};
use smedir_db::models::notification::UpdatePreferences;
use smedir_events::{DirectoryEvent, NotificationDispatcher};

async fn seed_employee(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO employees (email, first_name, last_name) \
         VALUES ($1, 'Ana', 'Silva') RETURNING id",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

fn endorsement_event(recipient: DbId) -> DirectoryEvent {
    DirectoryEvent::EndorsementCreated {
        sme_employee_id: recipient,
        endorser_name: "Dana Reyes".into(),
        endorser_position: None,
        skill_name: "Hydraulics".into(),
        endorsement_id: 77,
        comment: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dispatch_creates_in_app_row(pool: PgPool) {
    let recipient = seed_employee(&pool, "ana@example.com").await;
    let dispatcher = NotificationDispatcher::new(pool.clone(), None);

    dispatcher.dispatch(&endorsement_event(recipient)).await;

    let rows = NotificationRepo::list_for_employee(&pool, recipient, false, 10, 0)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].notification_type, "endorsement");
    assert_eq!(rows[0].title, "New endorsement for Hydraulics");
    assert_eq!(rows[0].link.as_deref(), Some("/profile"));
    assert_eq!(rows[0].related_id, Some(77));
    assert!(!rows[0].is_read);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_preference_gates_delivery(pool: PgPool) {
    let recipient = seed_employee(&pool, "ana@example.com").await;
    NotificationPreferenceRepo::update(
        &pool,
        recipient,
        &UpdatePreferences {
            in_app_enabled: None,
            email_enabled: None,
            endorsements_enabled: Some(false),
            nominations_enabled: None,
            profile_changes_enabled: None,
        },
    )
    .await
    .unwrap();

    let dispatcher = NotificationDispatcher::new(pool.clone(), None);
    dispatcher.dispatch(&endorsement_event(recipient)).await;

    let rows = NotificationRepo::list_for_employee(&pool, recipient, false, 10, 0)
        .await
        .unwrap();
    assert!(rows.is_empty());

    // Other categories still deliver.
    dispatcher
        .dispatch(&DirectoryEvent::ProfileStatusChanged {
            owner_employee_id: recipient,
            profile_id: 5,
            status: "suspended".into(),
        })
        .await;
    let rows = NotificationRepo::list_for_employee(&pool, recipient, false, 10, 0)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].notification_type, "profile_change");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_in_app_channel_toggle(pool: PgPool) {
    let recipient = seed_employee(&pool, "ana@example.com").await;
    NotificationPreferenceRepo::update(
        &pool,
        recipient,
        &UpdatePreferences {
            in_app_enabled: Some(false),
            email_enabled: None,
            endorsements_enabled: None,
            nominations_enabled: None,
            profile_changes_enabled: None,
        },
    )
    .await
    .unwrap();

    let dispatcher = NotificationDispatcher::new(pool.clone(), None);
    dispatcher.dispatch(&endorsement_event(recipient)).await;

    let rows = NotificationRepo::list_for_employee(&pool, recipient, false, 10, 0)
        .await
        .unwrap();
    assert!(rows.is_empty());
}
