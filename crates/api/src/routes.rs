pub mod appointment;
pub mod availability;
pub mod feedback;
pub mod health;
pub mod user;
