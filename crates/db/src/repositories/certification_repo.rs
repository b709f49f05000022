//! Repository for the `certifications` table.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::certification::{Certification, CreateCertification};

/// Column list for `certifications` queries.
const COLUMNS: &str = "id, profile_id, name, issuer, issued_on, expires_on, created_at";

/// Provides CRUD operations for certifications.
pub struct CertificationRepo;

impl CertificationRepo {
    /// Attach a certification to a profile.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO certifications (profile_id, name, issuer, issued_on, expires_on) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(profile_id)
            .bind(&input.name)
            .bind(&input.issuer)
            .bind(input.issued_on)
            .bind(input.expires_on)
            .fetch_one(pool)
            .await
    }

    /// List a profile's certifications, most recently issued first.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<Certification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM certifications \
             WHERE profile_id = $1 \
             ORDER BY issued_on DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a certification if it belongs to `profile_id`.
    ///
    /// Returns `true` when a row was deleted.
    pub async fn delete_owned(
        pool: &PgPool,
        certification_id: DbId,
        profile_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1 AND profile_id = $2")
            .bind(certification_id)
            .bind(profile_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
