//! Repository for the `nominations` table.

use sqlx::{PgPool, Postgres, Transaction};
use smedir_core::nomination::NominationStatus;
use smedir_core::types::DbId;

use crate::models::nomination::Nomination;

/// Column list for `nominations` queries.
const COLUMNS: &str =
    "id, nominee_id, nominator_id, department_name, status, decision_note, requested_at, decided_at";

/// Provides CRUD operations and state transitions for nominations.
pub struct NominationRepo;

impl NominationRepo {
    /// Insert a `submitted` nomination, snapshotting the nominee's current
    /// department name.
    pub async fn create(
        pool: &PgPool,
        nominee_id: DbId,
        nominator_id: DbId,
        department_name: Option<&str>,
    ) -> Result<Nomination, sqlx::Error> {
        let query = format!(
            "INSERT INTO nominations (nominee_id, nominator_id, department_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Nomination>(&query)
            .bind(nominee_id)
            .bind(nominator_id)
            .bind(department_name)
            .fetch_one(pool)
            .await
    }

    /// Find the (at most one) submitted nomination for a nominee.
    pub async fn find_submitted_for_nominee(
        pool: &PgPool,
        nominee_id: DbId,
    ) -> Result<Option<Nomination>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM nominations WHERE nominee_id = $1 AND status = $2"
        );
        sqlx::query_as::<_, Nomination>(&query)
            .bind(nominee_id)
            .bind(NominationStatus::Submitted.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List nominations, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<Nomination>, sqlx::Error> {
        let filter = if status.is_some() {
            "WHERE status = $1"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM nominations {filter} ORDER BY requested_at DESC"
        );
        let mut q = sqlx::query_as::<_, Nomination>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Flip every submitted nomination for `nominee_id` to `approved` with
    /// a decision timestamp. Part of the profile-creation transaction.
    ///
    /// Returns the nominations that were approved.
    pub async fn approve_submitted_for_nominee(
        tx: &mut Transaction<'_, Postgres>,
        nominee_id: DbId,
    ) -> Result<Vec<Nomination>, sqlx::Error> {
        Self::transition_for_nominee(
            tx,
            nominee_id,
            NominationStatus::Submitted,
            NominationStatus::Approved,
            None,
        )
        .await
    }

    /// Force every approved nomination for `nominee_id` to `rejected` with
    /// a system-authored decision note. Part of the profile-deletion
    /// transaction.
    pub async fn reject_approved_for_nominee(
        tx: &mut Transaction<'_, Postgres>,
        nominee_id: DbId,
        decision_note: &str,
    ) -> Result<u64, sqlx::Error> {
        let rejected = Self::transition_for_nominee(
            tx,
            nominee_id,
            NominationStatus::Approved,
            NominationStatus::Rejected,
            Some(decision_note),
        )
        .await?;
        Ok(rejected.len() as u64)
    }

    /// Move all of a nominee's nominations in `from` to `to`, stamping the
    /// decision time.
    ///
    /// Pairs the status machine does not define touch no rows. The `from`
    /// predicate in the UPDATE keeps the check-and-set atomic, so rows
    /// decided by a concurrent transaction are skipped rather than
    /// re-decided.
    async fn transition_for_nominee(
        tx: &mut Transaction<'_, Postgres>,
        nominee_id: DbId,
        from: NominationStatus,
        to: NominationStatus,
        decision_note: Option<&str>,
    ) -> Result<Vec<Nomination>, sqlx::Error> {
        if !from.can_transition(to) {
            return Ok(Vec::new());
        }

        let query = format!(
            "UPDATE nominations \
             SET status = $1, decided_at = NOW(), \
                 decision_note = COALESCE($2, decision_note) \
             WHERE nominee_id = $3 AND status = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Nomination>(&query)
            .bind(to.as_str())
            .bind(decision_note)
            .bind(nominee_id)
            .bind(from.as_str())
            .fetch_all(&mut **tx)
            .await
    }
}
