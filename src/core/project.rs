//! Project business logic - list, create and delete projects.
//!
//! Projects reference a client optionally. Listing joins the client's name for
//! display; a project whose client was deleted is still listed, without a name.

use crate::{
    core::validation::{optional_text, parse_number_or_default, require_non_empty, text_or_default},
    entities::{Client, Project, project},
    errors::Result,
};
use sea_orm::{QuerySelect, Set, prelude::*};
use tracing::{info, warn};

/// Status given to new projects when none is entered.
pub const DEFAULT_PROJECT_STATUS: &str = "ongoing";

/// Raw form input for a new project
#[derive(Debug, Clone, Copy, Default)]
pub struct NewProject<'a> {
    /// Selected client, if any
    pub client_id: Option<i64>,
    /// Project name (required)
    pub project_name: &'a str,
    /// Contract value; empty means 0
    pub project_value: &'a str,
    /// Start date as entered
    pub start_date: &'a str,
    /// End date as entered
    pub end_date: &'a str,
    /// Status label; empty means `"ongoing"`
    pub status: &'a str,
}

/// A project together with the name of its client, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    /// The project row
    pub project: project::Model,
    /// Client name, `None` when unset or the client no longer exists
    pub client_name: Option<String>,
}

/// Retrieves all projects with their client names, in store order.
pub async fn get_all_projects(db: &DatabaseConnection) -> Result<Vec<ProjectRow>> {
    let rows = Project::find().find_also_related(Client).all(db).await?;
    Ok(rows
        .into_iter()
        .map(|(project, client)| ProjectRow {
            project,
            client_name: client.map(|c| c.name),
        })
        .collect())
}

/// Retrieves a project by id.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Option<project::Model>> {
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a project after validating its name and value.
///
/// # Errors
/// Returns `Error::MissingField` for an empty name, `Error::InvalidNumber` for a
/// non-numeric value, or a database error if the insert fails.
pub async fn create_project(
    db: &DatabaseConnection,
    form: NewProject<'_>,
) -> Result<project::Model> {
    let project_name = require_non_empty("Project name", form.project_name)
        .inspect_err(|e| warn!("Rejected project: {}", e))?;
    let project_value = parse_number_or_default("Project value", form.project_value, 0.0)
        .inspect_err(|e| warn!("Rejected project: {}", e))?;

    let project = project::ActiveModel {
        client_id: Set(form.client_id),
        project_name: Set(project_name),
        project_value: Set(Some(project_value)),
        start_date: Set(optional_text(form.start_date)),
        end_date: Set(optional_text(form.end_date)),
        status: Set(Some(text_or_default(form.status, DEFAULT_PROJECT_STATUS))),
        ..Default::default()
    };
    let created = project.insert(db).await?;
    info!("Added project {} '{}'", created.id, created.project_name);
    Ok(created)
}

/// Deletes a project by id, returning the number of rows removed (0 if absent).
///
/// Payments recorded against the project are kept.
pub async fn delete_project(db: &DatabaseConnection, project_id: i64) -> Result<u64> {
    let result = Project::delete_by_id(project_id).exec(db).await?;
    info!("Deleted project {} ({} row(s))", project_id, result.rows_affected);
    Ok(result.rows_affected)
}

/// Id/name pairs for choosing a project on the payment form.
pub async fn get_project_choices(db: &DatabaseConnection) -> Result<Vec<(i64, String)>> {
    Project::find()
        .select_only()
        .column(project::Column::Id)
        .column(project::Column::ProjectName)
        .into_tuple::<(i64, String)>()
        .all(db)
        .await
        .map_err(Into::into)
}
