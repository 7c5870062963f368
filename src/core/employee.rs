//! Employee business logic - the only record type that supports editing.
//!
//! Salary is optional on the form: empty text is stored as 0, anything else must
//! parse as a number. Deleting an employee keeps their salary records.

use crate::{
    core::validation::{optional_text, parse_number_or_default, require_non_empty},
    entities::{Employee, employee},
    errors::Result,
};
use sea_orm::{ActiveValue::NotSet, QuerySelect, Set, prelude::*};
use tracing::{debug, info, warn};

/// Status given to new employees when none is entered.
pub const DEFAULT_EMPLOYEE_STATUS: &str = "active";

/// Raw form input for creating or editing an employee
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeForm<'a> {
    /// Full name (required)
    pub name: &'a str,
    /// Phone number
    pub phone: &'a str,
    /// National identity card number
    pub cnic: &'a str,
    /// Job title
    pub designation: &'a str,
    /// Salary; empty means 0
    pub salary: &'a str,
    /// Status label. On create, `None` or empty means `"active"`; on update it
    /// leaves the stored status untouched.
    pub status: Option<&'a str>,
}

struct ValidEmployee {
    name: String,
    phone: Option<String>,
    cnic: Option<String>,
    designation: Option<String>,
    salary: f64,
    status: Option<String>,
}

fn validate(form: &EmployeeForm<'_>) -> Result<ValidEmployee> {
    Ok(ValidEmployee {
        name: require_non_empty("Employee name", form.name)?,
        phone: optional_text(form.phone),
        cnic: optional_text(form.cnic),
        designation: optional_text(form.designation),
        salary: parse_number_or_default("Salary", form.salary, 0.0)?,
        status: form.status.and_then(optional_text),
    })
}

/// Retrieves all employees in store order.
pub async fn get_all_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find().all(db).await.map_err(Into::into)
}

/// Retrieves an employee by id, e.g. to refill the edit form from a selected row.
pub async fn get_employee_by_id(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Option<employee::Model>> {
    Employee::find_by_id(employee_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates an employee. The join date is today's date.
///
/// # Errors
/// Returns `Error::MissingField` for an empty name, `Error::InvalidNumber` for a
/// non-numeric salary, or a database error if the insert fails.
pub async fn create_employee(
    db: &DatabaseConnection,
    form: EmployeeForm<'_>,
) -> Result<employee::Model> {
    let valid = validate(&form).inspect_err(|e| warn!("Rejected employee: {}", e))?;
    let join_date = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let employee = employee::ActiveModel {
        name: Set(valid.name),
        phone: Set(valid.phone),
        cnic: Set(valid.cnic),
        designation: Set(valid.designation),
        salary: Set(Some(valid.salary)),
        join_date: Set(Some(join_date)),
        status: Set(Some(
            valid
                .status
                .unwrap_or_else(|| DEFAULT_EMPLOYEE_STATUS.to_string()),
        )),
        ..Default::default()
    };
    let created = employee.insert(db).await?;
    info!("Added employee {} '{}'", created.id, created.name);
    Ok(created)
}

/// Overwrites the editable fields of an employee.
///
/// Name, phone, CNIC, designation and salary are always replaced; status only when
/// the form carries one. Earlier versions of the edit form never touched status, so
/// passing `status: None` keeps that behaviour. Returns the number of rows changed, which is 0 when no
/// employee has `employee_id`.
///
/// # Errors
/// Same validation as [`create_employee`]; nothing is written on failure.
pub async fn update_employee(
    db: &DatabaseConnection,
    employee_id: i64,
    form: EmployeeForm<'_>,
) -> Result<u64> {
    let valid = validate(&form)
        .inspect_err(|e| warn!("Rejected update of employee {}: {}", employee_id, e))?;

    let changes = employee::ActiveModel {
        id: NotSet,
        name: Set(valid.name),
        phone: Set(valid.phone),
        cnic: Set(valid.cnic),
        designation: Set(valid.designation),
        salary: Set(Some(valid.salary)),
        join_date: NotSet,
        status: valid.status.map_or(NotSet, |status| Set(Some(status))),
    };
    let result = Employee::update_many()
        .set(changes)
        .filter(employee::Column::Id.eq(employee_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        debug!("Update matched no employee with id {}", employee_id);
    } else {
        info!("Updated employee {}", employee_id);
    }
    Ok(result.rows_affected)
}

/// Deletes an employee by id, returning the number of rows removed (0 if absent).
pub async fn delete_employee(db: &DatabaseConnection, employee_id: i64) -> Result<u64> {
    let result = Employee::delete_by_id(employee_id).exec(db).await?;
    info!("Deleted employee {} ({} row(s))", employee_id, result.rows_affected);
    Ok(result.rows_affected)
}

/// Id/name pairs of active employees, for choosing who a salary is paid to.
pub async fn get_active_employee_choices(db: &DatabaseConnection) -> Result<Vec<(i64, String)>> {
    Employee::find()
        .select_only()
        .column(employee::Column::Id)
        .column(employee::Column::Name)
        .filter(employee::Column::Status.eq(DEFAULT_EMPLOYEE_STATUS))
        .into_tuple::<(i64, String)>()
        .all(db)
        .await
        .map_err(Into::into)
}
