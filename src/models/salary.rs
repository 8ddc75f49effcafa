//! Salary report model - backed by an externally owned reporting view

use serde::Serialize;
use sqlx::FromRow;

use crate::db::{Db, QueryError};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SalaryReport {
    pub emp_id: i32,
    pub name: String,
    pub dept_name: String,
    pub gross_salary: f64,
    pub net_salary: f64,
}

#[derive(Debug, Serialize)]
pub struct PayrollRunResponse {
    pub message: String,
    pub status: String,
}

impl SalaryReport {
    pub async fn list(db: &Db) -> Result<Vec<Self>, QueryError> {
        db.fetch_all(
            "SELECT emp_id, name, dept_name, gross_salary, net_salary \
             FROM vw_monthly_salary_report",
        )
        .await
    }
}
