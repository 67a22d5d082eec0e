//! JSON output generation for Place files.

mod writer;

pub use writer::{generate_json, save_place};
