//! Chat endpoint: intent classification and reply construction.

pub mod format;
pub mod handlers;
pub mod intent;
