//! Candidate dashboard — applications, saved jobs, proposals, notifications,
//! and derived stats over explicitly owned in-memory stores.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod store;
