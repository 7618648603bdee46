//! Domain value types and the ports the application layer talks through.

pub mod expense;
pub mod participant;
pub mod ports;
pub mod settlement;
