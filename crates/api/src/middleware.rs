/// Password hashing and verification for user accounts
pub mod auth;
/// Mapping of domain errors to HTTP responses
pub mod error_handling;
