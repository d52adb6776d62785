//! Interactive calculator applying one operator across a flat list of operands.

pub mod calculator;
pub mod config;
pub mod session;
