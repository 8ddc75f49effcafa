//! Data models

pub mod employee;
pub mod network;
pub mod salary;

pub use employee::*;
pub use network::*;
pub use salary::*;
