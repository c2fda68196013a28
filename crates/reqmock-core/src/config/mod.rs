//! Fixture manifest loading.

pub mod error;
pub mod fixture;
pub mod parser;
