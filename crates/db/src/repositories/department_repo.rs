//! Repository for the `departments` and `coordinator_departments` tables.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::department::Department;

/// Provides department lookups and coordinator authority checks.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, created_at FROM departments ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether `coordinator_id` manages the department that `employee_id`
    /// belongs to.
    ///
    /// Returns `false` when the target employee has no department; a
    /// coordinator has no implicit authority over department-less
    /// employees.
    pub async fn coordinator_manages_employee(
        pool: &PgPool,
        coordinator_id: DbId,
        employee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM coordinator_departments cd \
             JOIN employees e ON e.department_id = cd.department_id \
             WHERE cd.employee_id = $1 AND e.id = $2",
        )
        .bind(coordinator_id)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
        Ok(exists.is_some())
    }
}
