//! Machine entity - plant and equipment owned by the firm.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Machine database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machines")]
pub struct Model {
    /// Unique identifier for the machine
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Machine name (required)
    pub machine_name: String,
    /// Kind of machine, e.g. "Excavator"
    pub machine_type: Option<String>,
    /// Purchase date as entered
    pub purchase_date: Option<String>,
    /// Purchase cost, 0 when not given
    pub cost: Option<f64>,
    /// Free-form status label, `"available"` by default
    pub status: Option<String>,
}

/// Machines have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
