//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    config::database::{connect, ensure_schema},
    core::{
        client::{self, NewClient},
        employee::{self, EmployeeForm},
        payment::{self, NewPayment},
        project::{self, NewProject},
        salary::{self, NewSalaryRecord},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing::{Level, subscriber::DefaultGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Creates an in-memory `SQLite` database with the schema and default admin in place.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect("sqlite::memory:").await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Creates a client with only a name.
pub async fn create_test_client(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::client::Model> {
    client::create_client(
        db,
        NewClient {
            name,
            ..Default::default()
        },
    )
    .await
}

/// Creates a project with the given client, name and value text.
///
/// # Defaults
/// * dates: empty
/// * `status`: "ongoing"
pub async fn create_custom_project(
    db: &DatabaseConnection,
    client_id: Option<i64>,
    project_name: &str,
    project_value: &str,
) -> Result<entities::project::Model> {
    project::create_project(
        db,
        NewProject {
            client_id,
            project_name,
            project_value,
            ..Default::default()
        },
    )
    .await
}

/// Creates a payment dated 2024-01-15 against `project_id`.
pub async fn create_test_payment(
    db: &DatabaseConnection,
    project_id: i64,
    amount: &str,
) -> Result<entities::payment::Model> {
    payment::create_payment(
        db,
        NewPayment {
            project_id,
            amount,
            date: "2024-01-15",
        },
    )
    .await
}

/// Creates an employee with a name, designation and salary of 50000.
pub async fn create_test_employee(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::employee::Model> {
    employee::create_employee(
        db,
        EmployeeForm {
            name,
            designation: "Labourer",
            salary: "50000",
            ..Default::default()
        },
    )
    .await
}

/// Records a paid salary of 50000 for `employee_id` covering `month`.
pub async fn create_test_salary(
    db: &DatabaseConnection,
    employee_id: i64,
    month: &str,
) -> Result<entities::employee_salary::Model> {
    salary::create_salary_record(
        db,
        NewSalaryRecord {
            employee_id: Some(employee_id),
            salary_amount: "50000",
            month,
            date_paid: "2024-02-01",
            status: "paid",
        },
    )
    .await
}

/// Sets up a test database with one client named "Test Client".
pub async fn setup_with_client() -> Result<(DatabaseConnection, entities::client::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Test Client").await?;
    Ok((db, client))
}

/// Sets up a test database with "Test Project" owned by "Test Client".
pub async fn setup_with_project() -> Result<(DatabaseConnection, entities::project::Model)> {
    let (db, client) = setup_with_client().await?;
    let project = create_custom_project(&db, Some(client.id), "Test Project", "100000").await?;
    Ok((db, project))
}

/// Sets up a test database with one active employee named "Test Employee".
pub async fn setup_with_employee() -> Result<(DatabaseConnection, entities::employee::Model)> {
    let db = setup_test_db().await?;
    let employee = create_test_employee(&db, "Test Employee").await?;
    Ok((db, employee))
}

/// Collects formatted log output so tests can assert on what was logged.
///
/// `capture` installs a subscriber for the current thread until the returned guard
/// is dropped, which covers `#[tokio::test]` bodies on the single-threaded runtime.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Starts capturing log lines at `debug` and above.
    pub fn capture() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    /// Everything logged so far.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut logged) = self.0.lock() {
            logged.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
