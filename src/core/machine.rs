//! Machine business logic - list, create and delete equipment records.

use crate::{
    core::validation::{optional_text, parse_number_or_default, require_non_empty, text_or_default},
    entities::{Machine, machine},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::{info, warn};

/// Status given to new machines when none is entered.
pub const DEFAULT_MACHINE_STATUS: &str = "available";

/// Raw form input for a new machine
#[derive(Debug, Clone, Copy, Default)]
pub struct NewMachine<'a> {
    /// Machine name (required)
    pub machine_name: &'a str,
    /// Kind of machine, e.g. "Excavator"
    pub machine_type: &'a str,
    /// Purchase date as entered
    pub purchase_date: &'a str,
    /// Purchase cost; empty means 0
    pub cost: &'a str,
    /// Status label; empty means `"available"`
    pub status: &'a str,
}

/// Retrieves all machines in store order.
pub async fn get_all_machines(db: &DatabaseConnection) -> Result<Vec<machine::Model>> {
    Machine::find().all(db).await.map_err(Into::into)
}

/// Creates a machine after validating its name and cost.
///
/// # Errors
/// Returns `Error::MissingField` for an empty name, `Error::InvalidNumber` for a
/// non-numeric cost, or a database error if the insert fails.
pub async fn create_machine(
    db: &DatabaseConnection,
    form: NewMachine<'_>,
) -> Result<machine::Model> {
    let machine_name = require_non_empty("Machine name", form.machine_name)
        .inspect_err(|e| warn!("Rejected machine: {}", e))?;
    let cost = parse_number_or_default("Machine cost", form.cost, 0.0)
        .inspect_err(|e| warn!("Rejected machine: {}", e))?;

    let machine = machine::ActiveModel {
        machine_name: Set(machine_name),
        machine_type: Set(optional_text(form.machine_type)),
        purchase_date: Set(optional_text(form.purchase_date)),
        cost: Set(Some(cost)),
        status: Set(Some(text_or_default(form.status, DEFAULT_MACHINE_STATUS))),
        ..Default::default()
    };
    let created = machine.insert(db).await?;
    info!("Added machine {} '{}'", created.id, created.machine_name);
    Ok(created)
}

/// Deletes a machine by id, returning the number of rows removed (0 if absent).
pub async fn delete_machine(db: &DatabaseConnection, machine_id: i64) -> Result<u64> {
    let result = Machine::delete_by_id(machine_id).exec(db).await?;
    info!("Deleted machine {} ({} row(s))", machine_id, result.rows_affected);
    Ok(result.rows_affected)
}
