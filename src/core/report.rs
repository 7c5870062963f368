//! Overview figures for the dashboard.
//!
//! Every call re-queries the store; nothing is cached between calls.

use crate::{
    entities::{Client, Payment, Project, payment, project},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QuerySelect, prelude::*, sea_query::Expr};
use tracing::debug;

/// Headline figures shown after login.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    /// Number of clients
    pub client_count: u64,
    /// Number of projects
    pub project_count: u64,
    /// Number of projects whose status is `"ongoing"`
    pub ongoing_project_count: u64,
    /// Sum of all payment amounts, 0 when there are none
    pub payments_total: f64,
}

/// Computes the overview figures.
pub async fn get_overview(db: &DatabaseConnection) -> Result<Overview> {
    let client_count = Client::find().count(db).await?;
    let project_count = Project::find().count(db).await?;
    let ongoing_project_count = Project::find()
        .filter(project::Column::Status.eq(crate::core::project::DEFAULT_PROJECT_STATUS))
        .count(db)
        .await?;
    let payments_total = get_payments_total(db).await?;

    let overview = Overview {
        client_count,
        project_count,
        ongoing_project_count,
        payments_total,
    };
    debug!("Computed overview: {:?}", overview);
    Ok(overview)
}

/// Sum of all payment amounts. An empty table sums to 0.
pub async fn get_payments_total(db: &DatabaseConnection) -> Result<f64> {
    let total = Payment::find()
        .select_only()
        .column_as(Expr::col(payment::Column::Amount).sum(), "total")
        .into_tuple::<Option<f64>>()
        .one(db)
        .await?;
    Ok(total.flatten().unwrap_or(0.0))
}

/// Formats a money amount with the configured currency label.
///
/// Returns a string like "Rs 1500.00"
#[must_use]
pub fn format_amount(currency_label: &str, amount: f64) -> String {
    format!("{currency_label} {amount:.2}")
}
