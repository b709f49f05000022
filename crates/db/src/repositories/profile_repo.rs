//! Repository for the `expert_profiles` table.
//!
//! Profile creation and deletion are multi-step invariant-preserving
//! sequences (the nomination state machine is coupled to both), so they
//! run as single transactions here rather than as handler-side call
//! chains.

use sqlx::{PgPool, Postgres, Transaction};
use smedir_core::nomination::REJECTION_NOTE_PROFILE_DELETED;
use smedir_core::profile::{ProfileStatus, PROFILE_APPROVED};
use smedir_core::types::DbId;

use crate::models::nomination::Nomination;
use crate::models::profile::{CreateProfile, ExpertProfile, UpdateProfile};
use crate::repositories::{NominationRepo, SkillRepo};

/// Column list for `expert_profiles` queries.
const COLUMNS: &str = "id, employee_id, bio, availability, contact_phone, contact_preference, \
    meeting_link, status, created_at, updated_at";

/// Outcome of the gated profile-creation transaction.
#[derive(Debug)]
pub enum CreateProfileOutcome {
    /// The profile was created and these nominations flipped to approved.
    Created {
        profile: ExpertProfile,
        approved_nominations: Vec<Nomination>,
    },
    /// The employee already holds a profile.
    ProfileExists,
    /// No submitted nomination gates this employee in.
    NoSubmittedNomination,
}

/// Provides CRUD operations and status transitions for expert profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ExpertProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expert_profiles WHERE id = $1");
        sqlx::query_as::<_, ExpertProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by its owning employee.
    pub async fn find_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Option<ExpertProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expert_profiles WHERE employee_id = $1");
        sqlx::query_as::<_, ExpertProfile>(&query)
            .bind(employee_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a profile for `employee_id`, gated by the nomination state
    /// machine.
    ///
    /// One transaction: verify no profile exists and a submitted nomination
    /// does, insert the profile as `approved`, bulk-insert skills, and flip
    /// the gating nomination(s) to `approved`. Completing the profile form
    /// IS the approval signal; there is no separate coordinator sign-off.
    pub async fn create_with_skills(
        pool: &PgPool,
        employee_id: DbId,
        input: &CreateProfile,
    ) -> Result<CreateProfileOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM expert_profiles WHERE employee_id = $1 FOR UPDATE",
        )
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await?;
        if existing.is_some() {
            return Ok(CreateProfileOutcome::ProfileExists);
        }

        let gated: Option<DbId> = sqlx::query_scalar(
            "SELECT id FROM nominations WHERE nominee_id = $1 AND status = 'submitted' FOR UPDATE",
        )
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await?;
        if gated.is_none() {
            return Ok(CreateProfileOutcome::NoSubmittedNomination);
        }

        let insert_query = format!(
            "INSERT INTO expert_profiles \
                (employee_id, bio, availability, contact_phone, contact_preference, meeting_link, status) \
             VALUES ($1, $2, COALESCE($3, '{{}}'::jsonb), $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let profile = sqlx::query_as::<_, ExpertProfile>(&insert_query)
            .bind(employee_id)
            .bind(&input.bio)
            .bind(&input.availability)
            .bind(&input.contact_phone)
            .bind(&input.contact_preference)
            .bind(&input.meeting_link)
            .bind(PROFILE_APPROVED)
            .fetch_one(&mut *tx)
            .await?;

        for skill in &input.skills {
            SkillRepo::insert_expert_skill(&mut tx, profile.id, skill).await?;
        }

        let approved_nominations =
            NominationRepo::approve_submitted_for_nominee(&mut tx, employee_id).await?;

        tx.commit().await?;
        Ok(CreateProfileOutcome::Created {
            profile,
            approved_nominations,
        })
    }

    /// Partially update a profile. Absent fields are untouched; a supplied
    /// skill list replaces the full set.
    pub async fn update(
        pool: &PgPool,
        profile_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<ExpertProfile>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE expert_profiles SET \
                bio = COALESCE($2, bio), \
                availability = COALESCE($3, availability), \
                contact_phone = COALESCE($4, contact_phone), \
                contact_preference = COALESCE($5, contact_preference), \
                meeting_link = COALESCE($6, meeting_link), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let profile = sqlx::query_as::<_, ExpertProfile>(&update_query)
            .bind(profile_id)
            .bind(&input.bio)
            .bind(&input.availability)
            .bind(&input.contact_phone)
            .bind(&input.contact_preference)
            .bind(&input.meeting_link)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(profile) = profile else {
            return Ok(None);
        };

        if let Some(skills) = &input.skills {
            SkillRepo::replace_for_profile(&mut tx, profile.id, skills).await?;
        }

        tx.commit().await?;
        Ok(Some(profile))
    }

    /// Set a profile's status, returning the updated row.
    pub async fn set_status(
        pool: &PgPool,
        profile_id: DbId,
        status: ProfileStatus,
    ) -> Result<Option<ExpertProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE expert_profiles SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExpertProfile>(&query)
            .bind(profile_id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile and everything hanging off it, forcing any
    /// approved nomination for the owner back to `rejected`.
    ///
    /// Skills (and through them endorsements), certifications, and courses
    /// (and through them enrollments) go via `ON DELETE CASCADE`; the
    /// nomination rewrite happens in the same transaction.
    ///
    /// Returns `false` when the profile does not exist.
    pub async fn delete_cascading(pool: &PgPool, profile_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let employee_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM expert_profiles WHERE id = $1 RETURNING employee_id")
                .bind(profile_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(employee_id) = employee_id else {
            return Ok(false);
        };

        NominationRepo::reject_approved_for_nominee(
            &mut tx,
            employee_id,
            REJECTION_NOTE_PROFILE_DELETED,
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
