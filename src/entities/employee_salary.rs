//! Employee salary entity - one row per salary payment made to an employee.
//!
//! `status` is an arbitrary payment-status string (e.g. `"paid"`, `"pending"`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Salary record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_salaries")]
pub struct Model {
    /// Unique identifier for the salary record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employee who was paid
    pub employee_id: Option<i64>,
    /// Amount paid
    pub salary_amount: Option<f64>,
    /// Month the payment covers, e.g. `"January"`
    pub month: Option<String>,
    /// Date the payment was made, as entered
    pub date_paid: Option<String>,
    /// Payment status label
    pub status: Option<String>,
}

/// Defines relationships between `EmployeeSalary` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each salary record belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
