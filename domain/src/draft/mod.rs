//! Draft subdomain: the user's in-progress question/answer pair
//!
//! - [`entities::Draft`]: the five-field input record
//! - [`field::FieldUpdate`]: a typed edit to one field
//! - [`task::Task`]: clarity or evasion

pub mod entities;
pub mod field;
pub mod task;
