//! Certification entity model and DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use smedir_core::types::{DbId, Timestamp};

/// A row from the `certifications` table. Free-form credential records;
/// no uniqueness constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub profile_id: DbId,
    pub name: String,
    pub issuer: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating a certification.
#[derive(Debug, Deserialize)]
pub struct CreateCertification {
    pub name: String,
    pub issuer: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
}
