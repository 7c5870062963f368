//! Project entity - contracted jobs, optionally linked to a client.
//!
//! `client_id` is nullable and is not cleared when the client is deleted, so a
//! project may point at a client that no longer exists.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning client, if any
    pub client_id: Option<i64>,
    /// Project name (required)
    pub project_name: String,
    /// Contract value, 0 when not given
    pub project_value: Option<f64>,
    /// Start date as entered
    pub start_date: Option<String>,
    /// End date as entered
    pub end_date: Option<String>,
    /// Free-form status label, `"ongoing"` by default
    pub status: Option<String>,
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each project may belong to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// One project has many payments
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
