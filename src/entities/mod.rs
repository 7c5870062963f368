//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the tables created by `config::database::ensure_schema`.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod client;
pub mod employee;
pub mod employee_salary;
pub mod machine;
pub mod payment;
pub mod project;
pub mod user;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use employee_salary::{
    Column as EmployeeSalaryColumn, Entity as EmployeeSalary, Model as EmployeeSalaryModel,
};
pub use machine::{Column as MachineColumn, Entity as Machine, Model as MachineModel};
pub use payment::{Column as PaymentColumn, Entity as Payment, Model as PaymentModel};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
