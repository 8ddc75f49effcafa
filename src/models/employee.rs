//! Employee model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::{Db, QueryError};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub emp_id: i32,
    pub name: String,
    pub dept_id: i32,
    pub email: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub message: String,
    pub emp_id: i32,
}

impl Employee {
    pub async fn list(db: &Db) -> Result<Vec<Self>, QueryError> {
        db.fetch_all("SELECT emp_id, name, dept_id, email, role, status FROM employees")
            .await
    }
}
