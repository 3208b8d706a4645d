//! FactCalc-rs library: application logic for the factorial calculator.

pub mod app;
pub mod config;
pub mod errors;
