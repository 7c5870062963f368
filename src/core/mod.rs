/// Login check against the users table
pub mod auth;
/// Client records
pub mod client;
/// Employee records
pub mod employee;
/// Mapping of records to display rows
pub mod grid;
/// Machine records
pub mod machine;
/// Payment records
pub mod payment;
/// Project records
pub mod project;
/// Overview counts and totals
pub mod report;
/// Employee salary records
pub mod salary;
/// Shared form-field validators
pub mod validation;
