//! HR handlers - employees, payroll, salary reporting

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{CreateEmployeeResponse, Employee, PayrollRunResponse, SalaryReport};
use crate::{AppResult, AppState};

/// List all employees
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    if state.db.is_mock() {
        return Ok(Json(mock_employees()));
    }

    let employees = Employee::list(&state.db).await?;
    Ok(Json(employees))
}

/// Create an employee. Acknowledgement stub in both modes; the submitted
/// emp_id is echoed back unchanged. TODO: wire to an INSERT once the HR
/// schema accepts writes from this service.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(emp): Json<Employee>,
) -> Json<CreateEmployeeResponse> {
    let message = if state.db.is_mock() {
        "Employee created (mock)".to_string()
    } else {
        "Employee creation is not implemented in live mode yet".to_string()
    };

    Json(CreateEmployeeResponse {
        message,
        emp_id: emp.emp_id,
    })
}

#[derive(Debug, Deserialize)]
pub struct PayrollParams {
    /// Opaque month token, e.g. "2023-10". Not date-validated.
    pub month: String,
}

/// Trigger payroll calculation for a month. Stub for the calc_all_salaries
/// stored procedure.
pub async fn calculate_payroll(
    State(state): State<AppState>,
    Query(params): Query<PayrollParams>,
) -> Json<PayrollRunResponse> {
    let message = if state.db.is_mock() {
        format!("Payroll calculated for {} (mock)", params.month)
    } else {
        format!("Payroll calculated for {}", params.month)
    };

    Json(PayrollRunResponse {
        message,
        status: "SUCCESS".to_string(),
    })
}

/// Monthly salary report
pub async fn salary_report(State(state): State<AppState>) -> AppResult<Json<Vec<SalaryReport>>> {
    if state.db.is_mock() {
        return Ok(Json(mock_salary_report()));
    }

    let report = SalaryReport::list(&state.db).await?;
    Ok(Json(report))
}

fn mock_employees() -> Vec<Employee> {
    vec![
        Employee {
            emp_id: 1,
            name: "Alice Smith".to_string(),
            dept_id: 1,
            email: "alice@oracle.com".to_string(),
            role: "Engineer".to_string(),
            status: "ACTIVE".to_string(),
        },
        Employee {
            emp_id: 2,
            name: "Bob Jones".to_string(),
            dept_id: 2,
            email: "bob@oracle.com".to_string(),
            role: "HR".to_string(),
            status: "ACTIVE".to_string(),
        },
        Employee {
            emp_id: 3,
            name: "Charlie Brown".to_string(),
            dept_id: 1,
            email: "charlie@oracle.com".to_string(),
            role: "DevOps".to_string(),
            status: "ACTIVE".to_string(),
        },
    ]
}

fn mock_salary_report() -> Vec<SalaryReport> {
    vec![
        SalaryReport {
            emp_id: 1,
            name: "Alice Smith".to_string(),
            dept_name: "Engineering".to_string(),
            gross_salary: 11000.0,
            net_salary: 9680.0,
        },
        SalaryReport {
            emp_id: 2,
            name: "Bob Jones".to_string(),
            dept_name: "HR".to_string(),
            gross_salary: 8300.0,
            net_salary: 7470.0,
        },
    ]
}
