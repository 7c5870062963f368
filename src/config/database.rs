//! Database configuration module.
//!
//! Handles the `SQLite` connection and idempotent table creation. The DDL is kept as
//! plain SQL so that files created by earlier versions of the application open
//! unchanged: same column names, same defaults, same foreign key declarations.
//!
//! Foreign keys are declared but not enforced. Deleting a parent row leaves its
//! dependents in place with a dangling reference.

use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default location of the database file, created on first run.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database/firm.db?mode=rwc";

const CREATE_STATEMENTS: [&str; 7] = [
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL,
        role TEXT DEFAULT 'employee'
    )",
    "CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        contact TEXT,
        address TEXT
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_id INTEGER,
        project_name TEXT NOT NULL,
        project_value REAL DEFAULT 0,
        start_date TEXT,
        end_date TEXT,
        status TEXT DEFAULT 'ongoing',
        FOREIGN KEY (client_id) REFERENCES clients(id)
    )",
    "CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL,
        amount REAL NOT NULL,
        date TEXT NOT NULL,
        FOREIGN KEY (project_id) REFERENCES projects(id)
    )",
    "CREATE TABLE IF NOT EXISTS machines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        machine_name TEXT NOT NULL,
        machine_type TEXT,
        purchase_date TEXT,
        cost REAL DEFAULT 0,
        status TEXT DEFAULT 'available'
    )",
    "CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phone TEXT,
        cnic TEXT,
        designation TEXT,
        salary REAL,
        join_date TEXT DEFAULT CURRENT_DATE,
        status TEXT DEFAULT 'active'
    )",
    "CREATE TABLE IF NOT EXISTS employee_salaries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER,
        salary_amount REAL,
        month TEXT,
        date_paid TEXT,
        status TEXT,
        FOREIGN KEY (employee_id) REFERENCES employees(id)
    )",
];

// Relies on the UNIQUE constraint on users.username.
const SEED_ADMIN: &str =
    "INSERT OR IGNORE INTO users (username, password, role) VALUES ('admin', '123', 'admin')";

/// Gets the database URL from the `DATABASE_URL` environment variable, if set and non-empty.
#[must_use]
pub fn database_url_from_env() -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// How long the pooled connection may sit idle or stay open before being replaced.
/// Long enough that it never happens in practice.
const CONNECTION_KEEP_ALIVE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Pool settings for [`connect`].
///
/// Exactly one connection is opened and kept for the life of the handle. An
/// in-memory database exists only as long as its connection, so the pool must never
/// reap or recycle it.
#[must_use]
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(CONNECTION_KEEP_ALIVE)
        .max_lifetime(CONNECTION_KEEP_ALIVE)
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(|opts| opts.foreign_keys(false));
    options
}

/// Opens the database handle.
///
/// The handle holds at most one connection. Each repository call checks it out for
/// the duration of its statement and returns it when the call completes, on success
/// and on error alike.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    Database::connect(connect_options(database_url))
        .await
        .map_err(Into::into)
}

/// Creates every table if absent and seeds the default administrator.
///
/// Safe to call on every start. Any failure here is a storage failure and should
/// abort startup.
#[instrument(skip(db))]
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    debug!("Executing CREATE TABLE statements if tables do not exist.");
    for statement in CREATE_STATEMENTS {
        db.execute_unprepared(statement).await?;
    }

    let seeded = db.execute_unprepared(SEED_ADMIN).await?;
    if seeded.rows_affected() > 0 {
        info!("Seeded default administrator account.");
    }

    info!("Database tables ensured.");
    Ok(())
}
