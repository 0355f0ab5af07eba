pub mod constants;
pub mod driver;

pub use driver::{Driver, DriverOutcome};
