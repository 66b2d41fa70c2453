//! Submission subdomain: one attempt to classify a draft and its outcome

pub mod state;
pub mod value_objects;
