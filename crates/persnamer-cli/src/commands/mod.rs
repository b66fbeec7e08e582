pub mod config;
pub mod lookup;

pub use lookup::{run_lookup, LookupArgs};
