//! # CareSync Core
//!
//! Domain models, the error taxonomy, and the scheduling rules shared by the
//! database and API crates.
//!
//! - [`validation`] decides whether a proposed appointment may be booked
//! - [`store`] declares the persistence capabilities the rules depend on
//! - [`booking`] wires the two together for the create and status flows

pub mod booking;
pub mod errors;
pub mod models;
pub mod store;
pub mod validation;
