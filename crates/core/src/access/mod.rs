//! Access module - caller identity and the authorization policy.

mod access_model;
mod access_policy;

pub use access_model::{Action, Caller, Identity};
pub use access_policy::authorize;
