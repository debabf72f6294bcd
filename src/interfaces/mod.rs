//! User interfaces
//!
//! - `cli`: one-shot commands on top of [`crate::services::LinkService`]

pub mod cli;
