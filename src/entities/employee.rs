//! Employee entity - staff on the payroll.
//!
//! Only employees with status `"active"` are offered when recording salaries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name (required)
    pub name: String,
    /// Phone number
    pub phone: Option<String>,
    /// National identity card number
    pub cnic: Option<String>,
    /// Job title
    pub designation: Option<String>,
    /// Monthly salary, 0 when not given
    pub salary: Option<f64>,
    /// Date the employee joined, `YYYY-MM-DD`
    pub join_date: Option<String>,
    /// Free-form status label, `"active"` by default
    pub status: Option<String>,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One employee has many salary records
    #[sea_orm(has_many = "super::employee_salary::Entity")]
    Salaries,
}

impl Related<super::employee_salary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salaries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
