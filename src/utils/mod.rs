//! Utility modules for the listerm application.
//!
//! - [`datetime`] - Due date parsing and human-readable date formatting

pub mod datetime;
