pub mod appointment;
pub mod email;
pub mod offices;
