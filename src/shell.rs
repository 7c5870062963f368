//! Line-oriented terminal front end.
//!
//! Gates access behind a login prompt, then shows the overview and lets the user
//! list, add and delete every kind of record and edit employees. Forms are filled
//! one prompt per field. Input and output are generic so the shell can be driven
//! from tests.

use crate::{
    config::AppConfig,
    core::{
        auth::{self, Session},
        client::{self, NewClient},
        employee::{self, DEFAULT_EMPLOYEE_STATUS, EmployeeForm},
        grid::{GridRow, render_grid},
        machine::{self, DEFAULT_MACHINE_STATUS, NewMachine},
        payment::{self, NewPayment},
        project::{self, DEFAULT_PROJECT_STATUS, NewProject},
        report::{self, format_amount},
        salary::{self, NewSalaryRecord},
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::{error, info, instrument};

const HELP: &str = "Commands: overview, clients, projects, payments, machines, employees, \
                    salaries, add <record>, delete <record> <id>, edit employee <id>, help, \
                    logout, quit";

const CANCELLED: &str = "Cancelled.";

/// A kind of record the shell can list, add and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Clients
    Clients,
    /// Projects
    Projects,
    /// Payments received
    Payments,
    /// Machines
    Machines,
    /// Employees
    Employees,
    /// Salary records
    Salaries,
}

impl Table {
    /// Accepts singular and plural record names.
    fn parse(name: &str) -> Option<Self> {
        match name {
            "client" | "clients" => Some(Self::Clients),
            "project" | "projects" => Some(Self::Projects),
            "payment" | "payments" => Some(Self::Payments),
            "machine" | "machines" => Some(Self::Machines),
            "employee" | "employees" => Some(Self::Employees),
            "salary" | "salaries" => Some(Self::Salaries),
            _ => None,
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Clients => "client",
            Self::Projects => "project",
            Self::Payments => "payment",
            Self::Machines => "machine",
            Self::Employees => "employee",
            Self::Salaries => "salary record",
        }
    }
}

/// A command accepted after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the overview figures
    Overview,
    /// List every record of a kind
    List(Table),
    /// Fill in a form and store a new record
    Add(Table),
    /// Delete the record with the given id
    Delete(Table, i64),
    /// Edit the employee with the given id
    EditEmployee(i64),
    /// Show the command list
    Help,
    /// Return to the login prompt
    Logout,
    /// Leave the application
    Quit,
}

impl Command {
    /// Parses a command line, ignoring case and extra whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.trim().to_ascii_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();

        match words.as_slice() {
            ["overview"] => Some(Self::Overview),
            ["help" | "?"] => Some(Self::Help),
            ["logout"] => Some(Self::Logout),
            ["quit" | "exit"] => Some(Self::Quit),
            ["add", name] => Table::parse(name).map(Self::Add),
            ["delete", name, id] => Some(Self::Delete(Table::parse(name)?, id.parse().ok()?)),
            ["edit", "employee", id] => id.parse().ok().map(Self::EditEmployee),
            [name] => Table::parse(name).map(Self::List),
            _ => None,
        }
    }
}

enum SessionEnd {
    Logout,
    Quit,
}

/// Runs the shell until the user quits or input ends.
#[instrument(skip_all)]
pub async fn run<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let Some(session) = login(db, input, output).await? else {
            return Ok(());
        };

        match dashboard(db, config, &session, input, output).await? {
            SessionEnd::Logout => {
                info!("User '{}' logged out", session.username);
            }
            SessionEnd::Quit => return Ok(()),
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts for each `(label, current)` field in turn. A field with a current value
/// shows it in brackets and keeps it when the answer is blank. `None` means input
/// ended before the form was complete.
fn ask<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    output: &mut W,
    fields: [(&str, &str); N],
) -> Result<Option<[String; N]>> {
    let mut answers = Vec::with_capacity(N);
    for (label, current) in fields {
        let shown = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };
        let Some(answer) = prompt(input, output, &shown)? else {
            return Ok(None);
        };
        answers.push(if answer.trim().is_empty() {
            current.to_string()
        } else {
            answer
        });
    }
    Ok(answers.try_into().ok())
}

enum Pick {
    Chosen(i64),
    Skipped,
    Unknown(String),
}

/// Lists `choices` and asks for one of their ids. `None` means input ended.
fn pick<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    choices: &[(i64, String)],
) -> Result<Option<Pick>> {
    for (id, name) in choices {
        writeln!(output, "  {id}: {name}")?;
    }
    let Some(answer) = prompt(input, output, &format!("{label} id: "))? else {
        return Ok(None);
    };

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(Some(Pick::Skipped));
    }
    let chosen = answer
        .parse::<i64>()
        .ok()
        .filter(|id| choices.iter().any(|(choice, _)| choice == id));
    Ok(Some(chosen.map_or_else(
        || Pick::Unknown(answer.to_string()),
        Pick::Chosen,
    )))
}

async fn login<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Session>> {
    loop {
        let Some(username) = prompt(input, output, "Username: ")? else {
            return Ok(None);
        };
        let Some(password) = prompt(input, output, "Password: ")? else {
            return Ok(None);
        };

        match auth::authenticate(db, &username, &password).await? {
            Some(session) => return Ok(Some(session)),
            None => writeln!(output, "Invalid username or password")?,
        }
    }
}

async fn dashboard<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    config: &AppConfig,
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd> {
    writeln!(output, "Welcome, {} ({})", session.username, session.role)?;
    show(db, config, Command::Overview, output).await?;
    writeln!(output, "{HELP}")?;

    loop {
        let Some(line) = prompt(input, output, "> ")? else {
            return Ok(SessionEnd::Quit);
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Logout) => return Ok(SessionEnd::Logout),
            Some(Command::Quit) => return Ok(SessionEnd::Quit),
            Some(command @ (Command::Overview | Command::List(_) | Command::Help)) => {
                show(db, config, command, output).await?;
            }
            Some(command) => change(db, command, input, output).await?,
            None => writeln!(output, "Unknown command '{}'. {HELP}", line.trim())?,
        }
    }
}

/// Renders the output of a display command. Storage failures are reported to the
/// user and do not end the session.
async fn show<W: Write>(
    db: &DatabaseConnection,
    config: &AppConfig,
    command: Command,
    output: &mut W,
) -> Result<()> {
    match render(db, config, command).await {
        Ok(text) => writeln!(output, "{text}")?,
        Err(e) => {
            error!("Failed to load {:?}: {}", command, e);
            writeln!(output, "Error: {e}")?;
        }
    }
    Ok(())
}

async fn render(
    db: &DatabaseConnection,
    config: &AppConfig,
    command: Command,
) -> Result<String> {
    let text = match command {
        Command::Overview => {
            let overview = report::get_overview(db).await?;
            format!(
                "Clients: {}\nProjects: {} ({} ongoing)\nPayments received: {}",
                overview.client_count,
                overview.project_count,
                overview.ongoing_project_count,
                format_amount(&config.currency_label, overview.payments_total),
            )
        }
        Command::List(Table::Clients) => table(&client::get_all_clients(db).await?),
        Command::List(Table::Projects) => table(&project::get_all_projects(db).await?),
        Command::List(Table::Payments) => table(&payment::get_all_payments(db).await?),
        Command::List(Table::Machines) => table(&machine::get_all_machines(db).await?),
        Command::List(Table::Employees) => table(&employee::get_all_employees(db).await?),
        Command::List(Table::Salaries) => table(&salary::get_all_salary_records(db).await?),
        _ => HELP.to_string(),
    };
    Ok(text)
}

fn table<T: GridRow>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "(no records)".to_string();
    }
    render_grid(rows)
}

/// Runs a command that writes. Rejected input and storage failures are reported to
/// the user and do not end the session; only terminal I/O failures do.
async fn change<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let outcome = match command {
        Command::Add(kind) => add(db, kind, input, output).await,
        Command::Delete(kind, id) => delete(db, kind, id).await,
        Command::EditEmployee(id) => edit_employee(db, id, input, output).await,
        _ => Ok(HELP.to_string()),
    };

    match outcome {
        Ok(message) => writeln!(output, "{message}")?,
        Err(e) if e.is_validation() => writeln!(output, "Rejected: {e}")?,
        Err(e @ Error::Io(_)) => return Err(e),
        Err(e) => {
            error!("Failed to run {:?}: {}", command, e);
            writeln!(output, "Error: {e}")?;
        }
    }
    Ok(())
}

async fn add<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    kind: Table,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let id = match kind {
        Table::Clients => {
            let Some([name, contact, address]) =
                ask(input, output, [("Name", ""), ("Contact", ""), ("Address", "")])?
            else {
                return Ok(CANCELLED.to_string());
            };
            let form = NewClient {
                name: &name,
                contact: &contact,
                address: &address,
            };
            client::create_client(db, form).await?.id
        }
        Table::Projects => {
            let choices = client::get_client_choices(db).await?;
            let client_id = if choices.is_empty() {
                None
            } else {
                match pick(input, output, "Client", &choices)? {
                    Some(Pick::Chosen(id)) => Some(id),
                    Some(Pick::Skipped) => None,
                    Some(Pick::Unknown(text)) => return Ok(format!("No client with id '{text}'.")),
                    None => return Ok(CANCELLED.to_string()),
                }
            };
            let Some([project_name, project_value, start_date, end_date, status]) = ask(
                input,
                output,
                [
                    ("Project name", ""),
                    ("Value", ""),
                    ("Start date", ""),
                    ("End date", ""),
                    ("Status", DEFAULT_PROJECT_STATUS),
                ],
            )?
            else {
                return Ok(CANCELLED.to_string());
            };
            let form = NewProject {
                client_id,
                project_name: &project_name,
                project_value: &project_value,
                start_date: &start_date,
                end_date: &end_date,
                status: &status,
            };
            project::create_project(db, form).await?.id
        }
        Table::Payments => {
            let choices = project::get_project_choices(db).await?;
            if choices.is_empty() {
                return Ok("No projects yet. Add a project first.".to_string());
            }
            let project_id = match pick(input, output, "Project", &choices)? {
                Some(Pick::Chosen(id)) => id,
                Some(Pick::Skipped) => return Ok("A project must be selected.".to_string()),
                Some(Pick::Unknown(text)) => return Ok(format!("No project with id '{text}'.")),
                None => return Ok(CANCELLED.to_string()),
            };
            let Some([amount, date]) = ask(input, output, [("Amount", ""), ("Date", "")])? else {
                return Ok(CANCELLED.to_string());
            };
            let form = NewPayment {
                project_id,
                amount: &amount,
                date: &date,
            };
            payment::create_payment(db, form).await?.id
        }
        Table::Machines => {
            let Some([machine_name, machine_type, purchase_date, cost, status]) = ask(
                input,
                output,
                [
                    ("Machine name", ""),
                    ("Type", ""),
                    ("Purchase date", ""),
                    ("Cost", ""),
                    ("Status", DEFAULT_MACHINE_STATUS),
                ],
            )?
            else {
                return Ok(CANCELLED.to_string());
            };
            let form = NewMachine {
                machine_name: &machine_name,
                machine_type: &machine_type,
                purchase_date: &purchase_date,
                cost: &cost,
                status: &status,
            };
            machine::create_machine(db, form).await?.id
        }
        Table::Employees => {
            let Some([name, phone, cnic, designation, salary]) = ask(
                input,
                output,
                [
                    ("Name", ""),
                    ("Phone", ""),
                    ("CNIC", ""),
                    ("Designation", ""),
                    ("Salary", ""),
                ],
            )?
            else {
                return Ok(CANCELLED.to_string());
            };
            let form = EmployeeForm {
                name: &name,
                phone: &phone,
                cnic: &cnic,
                designation: &designation,
                salary: &salary,
                status: Some(DEFAULT_EMPLOYEE_STATUS),
            };
            employee::create_employee(db, form).await?.id
        }
        Table::Salaries => {
            let choices = employee::get_active_employee_choices(db).await?;
            if choices.is_empty() {
                return Ok("No active employees.".to_string());
            }
            let employee_id = match pick(input, output, "Employee", &choices)? {
                Some(Pick::Chosen(id)) => id,
                Some(Pick::Skipped) => return Ok("An employee must be selected.".to_string()),
                Some(Pick::Unknown(text)) => return Ok(format!("No active employee with id '{text}'.")),
                None => return Ok(CANCELLED.to_string()),
            };
            let Some([salary_amount, month, date_paid, status]) = ask(
                input,
                output,
                [("Amount", ""), ("Month", ""), ("Date paid", ""), ("Status", "")],
            )?
            else {
                return Ok(CANCELLED.to_string());
            };
            let form = NewSalaryRecord {
                employee_id: Some(employee_id),
                salary_amount: &salary_amount,
                month: &month,
                date_paid: &date_paid,
                status: &status,
            };
            salary::create_salary_record(db, form).await?.id
        }
    };

    Ok(format!("Added {} {id}.", kind.noun()))
}

async fn delete(db: &DatabaseConnection, kind: Table, id: i64) -> Result<String> {
    let removed = match kind {
        Table::Clients => client::delete_client(db, id).await?,
        Table::Projects => project::delete_project(db, id).await?,
        Table::Payments => payment::delete_payment(db, id).await?,
        Table::Machines => machine::delete_machine(db, id).await?,
        Table::Employees => employee::delete_employee(db, id).await?,
        Table::Salaries => salary::delete_salary_record(db, id).await?,
    };

    if removed == 0 {
        Ok(format!("No such record: {} {id}", kind.noun()))
    } else {
        Ok(format!("Deleted {} {id}.", kind.noun()))
    }
}

/// Refills the employee form from the stored row; blank answers keep the stored value.
async fn edit_employee<R: BufRead, W: Write>(
    db: &DatabaseConnection,
    id: i64,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let Some(current) = employee::get_employee_by_id(db, id).await? else {
        return Ok(format!("No such record: employee {id}"));
    };

    let salary = current.salary.map(|s| s.to_string()).unwrap_or_default();
    let Some([name, phone, cnic, designation, salary, status]) = ask(
        input,
        output,
        [
            ("Name", current.name.as_str()),
            ("Phone", current.phone.as_deref().unwrap_or_default()),
            ("CNIC", current.cnic.as_deref().unwrap_or_default()),
            ("Designation", current.designation.as_deref().unwrap_or_default()),
            ("Salary", salary.as_str()),
            ("Status", current.status.as_deref().unwrap_or_default()),
        ],
    )?
    else {
        return Ok(CANCELLED.to_string());
    };

    let form = EmployeeForm {
        name: &name,
        phone: &phone,
        cnic: &cnic,
        designation: &designation,
        salary: &salary,
        status: Some(&status),
    };
    if employee::update_employee(db, id, form).await? == 0 {
        return Ok(format!("No such record: employee {id}"));
    }
    Ok(format!("Updated employee {id}."))
}
