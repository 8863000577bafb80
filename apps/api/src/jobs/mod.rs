//! Query building and result filtering around the external job-search API.

pub mod client;
pub mod filter;
pub mod handlers;
pub mod hints;
pub mod models;
