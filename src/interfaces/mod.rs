//! Transport-facing interfaces

pub mod http;
