//! Core value types shared by the registry and its callers.

pub mod key;
pub mod response;
