//! usersvc-server: validated CRUD over a Postgres `users` table
//!
//! Takes inbound HTTP requests, validates and normalizes their input,
//! runs one parameterized query per operation, and maps the outcome to a
//! JSON response with the matching status code.

pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use service::{ServiceError, ServiceResult, UserRecordService};
