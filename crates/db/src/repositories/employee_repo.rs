//! Repository for the `employees` table and role assignments.

use sqlx::PgPool;
use smedir_core::types::DbId;

use crate::models::employee::Employee;

/// Column list for `employees` queries.
const COLUMNS: &str = "id, email, first_name, last_name, department_id, site, position, \
    is_active, created_at, updated_at";

/// Provides lookups over employees and their roles.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an active employee by its internal ID.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Role codes assigned to an employee.
    pub async fn roles_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT r.code FROM roles r \
             JOIN employee_roles er ON er.role_id = r.id \
             WHERE er.employee_id = $1 \
             ORDER BY r.code",
        )
        .bind(employee_id)
        .fetch_all(pool)
        .await
    }

    /// The name of the employee's department, if any.
    pub async fn department_name(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT d.name FROM departments d \
             JOIN employees e ON e.department_id = d.id \
             WHERE e.id = $1",
        )
        .bind(employee_id)
        .fetch_optional(pool)
        .await
    }
}
