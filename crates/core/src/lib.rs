//! Domain logic for the craftadmin backend.
//!
//! This crate has no database or HTTP dependencies. Repositories and
//! handlers load data, hand it to the functions here, and act on the
//! decisions they return.

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod ledger;
pub mod roles;
pub mod types;
pub mod validation;
