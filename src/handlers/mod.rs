//! HTTP handlers for the customer CRUD surface.

pub mod customers;
