//! Form subdomain: draft ownership and the submit/resolve state machine
//!
//! ```text
//! idle --submit(valid)--> loading --resolve(ok)--> succeeded
//!                         loading --resolve(err)-> failed
//! succeeded/failed --submit(valid)--> loading
//! ```

pub mod guard;
pub mod state;
