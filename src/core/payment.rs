//! Payment business logic - list, create and delete payments received.
//!
//! Payments outlive their project. A payment whose project was deleted still shows
//! up in listings and still counts towards the overview total.

use crate::{
    core::validation::parse_required_number,
    entities::{Payment, Project, payment},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use tracing::{info, warn};

/// Raw form input for a new payment
#[derive(Debug, Clone, Copy)]
pub struct NewPayment<'a> {
    /// Project the payment is for
    pub project_id: i64,
    /// Amount received (required)
    pub amount: &'a str,
    /// Payment date as entered
    pub date: &'a str,
}

/// A payment together with the name of its project, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    /// The payment row
    pub payment: payment::Model,
    /// Project name, `None` when the project no longer exists
    pub project_name: Option<String>,
}

/// Retrieves all payments with their project names, in store order.
pub async fn get_all_payments(db: &DatabaseConnection) -> Result<Vec<PaymentRow>> {
    let rows = Payment::find().find_also_related(Project).all(db).await?;
    Ok(rows
        .into_iter()
        .map(|(payment, project)| PaymentRow {
            payment,
            project_name: project.map(|p| p.project_name),
        })
        .collect())
}

/// Creates a payment after validating the amount.
///
/// # Errors
/// Returns `Error::MissingField` for an empty amount, `Error::InvalidNumber` for a
/// non-numeric one, or a database error if the insert fails.
pub async fn create_payment(
    db: &DatabaseConnection,
    form: NewPayment<'_>,
) -> Result<payment::Model> {
    let amount = parse_required_number("Payment amount", form.amount)
        .inspect_err(|e| warn!("Rejected payment: {}", e))?;

    let payment = payment::ActiveModel {
        project_id: Set(form.project_id),
        amount: Set(amount),
        date: Set(form.date.trim().to_string()),
        ..Default::default()
    };
    let created = payment.insert(db).await?;
    info!(
        "Added payment {} of {} to project {}",
        created.id, created.amount, created.project_id
    );
    Ok(created)
}

/// Deletes a payment by id, returning the number of rows removed (0 if absent).
pub async fn delete_payment(db: &DatabaseConnection, payment_id: i64) -> Result<u64> {
    let result = Payment::delete_by_id(payment_id).exec(db).await?;
    info!("Deleted payment {} ({} row(s))", payment_id, result.rows_affected);
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_payment_integration() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        let payment = create_payment(
            &db,
            NewPayment {
                project_id: project.id,
                amount: "1500",
                date: "2024-03-01",
            },
        )
        .await?;
        assert_eq!(payment.amount, 1500.0);
        assert_eq!(payment.date, "2024-03-01");

        let rows = get_all_payments(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payment, payment);
        assert_eq!(rows[0].project_name.as_deref(), Some("Test Project"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_validation() -> Result<()> {
        let (db, project) = setup_with_project().await?;
        create_test_payment(&db, project.id, "100").await?;

        let result = create_payment(
            &db,
            NewPayment {
                project_id: project.id,
                amount: "",
                date: "2024-03-01",
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MissingField { field: "Payment amount" }
        ));

        let result = create_payment(
            &db,
            NewPayment {
                project_id: project.id,
                amount: "ten",
                date: "2024-03-01",
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidNumber { field: "Payment amount", value: _ }
        ));

        assert_eq!(get_all_payments(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_project_keeps_payment() -> Result<()> {
        let (db, project) = setup_with_project().await?;
        let payment = create_test_payment(&db, project.id, "750").await?;

        crate::core::project::delete_project(&db, project.id).await?;

        let rows = get_all_payments(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payment.id, payment.id);
        assert_eq!(rows[0].payment.project_id, project.id);
        assert_eq!(rows[0].project_name, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_payment() -> Result<()> {
        let (db, project) = setup_with_project().await?;
        let payment = create_test_payment(&db, project.id, "750").await?;

        assert_eq!(delete_payment(&db, payment.id).await?, 1);
        assert_eq!(delete_payment(&db, payment.id).await?, 0);
        assert!(get_all_payments(&db).await?.is_empty());

        Ok(())
    }
}
