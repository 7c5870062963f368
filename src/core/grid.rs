//! Pure mapping from records to display rows.
//!
//! Each listable record type names its column headers and turns itself into one
//! row of cells. `render_grid` lays rows out as a plain text table; any other
//! front end can use `HEADERS` and `to_cells` directly.

use crate::{
    core::{payment::PaymentRow, project::ProjectRow, salary::SalaryRow},
    entities::{client, employee, machine},
};

/// A record that can be shown as one row of a table.
pub trait GridRow {
    /// Column headers, in the order `to_cells` returns them
    const HEADERS: &'static [&'static str];

    /// The row's cells, one per header
    fn to_cells(&self) -> Vec<String>;
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl GridRow for client::Model {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Contact", "Address"];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            text(self.contact.as_deref()),
            text(self.address.as_deref()),
        ]
    }
}

impl GridRow for ProjectRow {
    const HEADERS: &'static [&'static str] = &["ID", "Client", "Project Name", "Value", "Status"];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.project.id.to_string(),
            text(self.client_name.as_deref()),
            self.project.project_name.clone(),
            number(self.project.project_value),
            text(self.project.status.as_deref()),
        ]
    }
}

impl GridRow for PaymentRow {
    const HEADERS: &'static [&'static str] = &["ID", "Project", "Amount", "Date"];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.payment.id.to_string(),
            text(self.project_name.as_deref()),
            self.payment.amount.to_string(),
            self.payment.date.clone(),
        ]
    }
}

impl GridRow for machine::Model {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Type", "Purchase Date", "Cost", "Status"];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.machine_name.clone(),
            text(self.machine_type.as_deref()),
            text(self.purchase_date.as_deref()),
            number(self.cost),
            text(self.status.as_deref()),
        ]
    }
}

impl GridRow for employee::Model {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Phone",
        "CNIC",
        "Designation",
        "Salary",
        "Status",
    ];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            text(self.phone.as_deref()),
            text(self.cnic.as_deref()),
            text(self.designation.as_deref()),
            number(self.salary),
            text(self.status.as_deref()),
        ]
    }
}

impl GridRow for SalaryRow {
    const HEADERS: &'static [&'static str] =
        &["ID", "Employee", "Amount", "Month", "Paid On", "Status"];

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.record.id.to_string(),
            text(self.employee_name.as_deref()),
            number(self.record.salary_amount),
            text(self.record.month.as_deref()),
            text(self.record.date_paid.as_deref()),
            text(self.record.status.as_deref()),
        ]
    }
}

/// Renders rows as a left-aligned text table with a header line.
#[must_use]
pub fn render_grid<T: GridRow>(rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(GridRow::to_cells).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: &[&str]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(T::HEADERS));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_line(values.as_slice()));
    }

    lines.join("\n")
}
