//! Employee salary business logic - record and remove salary payments.
//!
//! Listings are newest first (highest id first) and carry the employee's name. A
//! record whose employee was deleted keeps its row and is shown without a name.

use crate::{
    core::validation::{optional_text, parse_required_number},
    entities::{Employee, EmployeeSalary, employee_salary},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, warn};

/// Raw form input for a new salary record
#[derive(Debug, Clone, Copy, Default)]
pub struct NewSalaryRecord<'a> {
    /// Employee being paid
    pub employee_id: Option<i64>,
    /// Amount paid (required)
    pub salary_amount: &'a str,
    /// Month covered, e.g. "January"
    pub month: &'a str,
    /// Date paid as entered
    pub date_paid: &'a str,
    /// Payment status label, e.g. "paid"
    pub status: &'a str,
}

/// A salary record together with the employee's name, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRow {
    /// The salary row
    pub record: employee_salary::Model,
    /// Employee name, `None` when the employee no longer exists
    pub employee_name: Option<String>,
}

fn into_rows(
    rows: Vec<(employee_salary::Model, Option<crate::entities::employee::Model>)>,
) -> Vec<SalaryRow> {
    rows.into_iter()
        .map(|(record, employee)| SalaryRow {
            record,
            employee_name: employee.map(|e| e.name),
        })
        .collect()
}

/// Retrieves all salary records, newest first.
pub async fn get_all_salary_records(db: &DatabaseConnection) -> Result<Vec<SalaryRow>> {
    let rows = EmployeeSalary::find()
        .find_also_related(Employee)
        .order_by_desc(employee_salary::Column::Id)
        .all(db)
        .await?;
    Ok(into_rows(rows))
}

/// Retrieves the salary history of one employee, newest first.
pub async fn get_salary_records_for_employee(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Vec<SalaryRow>> {
    let rows = EmployeeSalary::find()
        .filter(employee_salary::Column::EmployeeId.eq(employee_id))
        .find_also_related(Employee)
        .order_by_desc(employee_salary::Column::Id)
        .all(db)
        .await?;
    Ok(into_rows(rows))
}

/// Records a salary payment after validating the amount.
///
/// # Errors
/// Returns `Error::MissingField` for an empty amount, `Error::InvalidNumber` for a
/// non-numeric one, or a database error if the insert fails.
pub async fn create_salary_record(
    db: &DatabaseConnection,
    form: NewSalaryRecord<'_>,
) -> Result<employee_salary::Model> {
    let salary_amount = parse_required_number("Salary amount", form.salary_amount)
        .inspect_err(|e| warn!("Rejected salary record: {}", e))?;

    let record = employee_salary::ActiveModel {
        employee_id: Set(form.employee_id),
        salary_amount: Set(Some(salary_amount)),
        month: Set(optional_text(form.month)),
        date_paid: Set(optional_text(form.date_paid)),
        status: Set(optional_text(form.status)),
        ..Default::default()
    };
    let created = record.insert(db).await?;
    info!(
        "Recorded salary {} for employee {:?}",
        created.id, created.employee_id
    );
    Ok(created)
}

/// Deletes a salary record by id, returning the number of rows removed (0 if absent).
pub async fn delete_salary_record(db: &DatabaseConnection, record_id: i64) -> Result<u64> {
    let result = EmployeeSalary::delete_by_id(record_id).exec(db).await?;
    info!("Deleted salary record {} ({} row(s))", record_id, result.rows_affected);
    Ok(result.rows_affected)
}
