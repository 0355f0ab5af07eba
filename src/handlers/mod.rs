pub mod action;
pub mod booking;
