//! JSON file storage
//!
//! Problem datasets are read from a JSON array; answers are checkpointed to a
//! JSON array of `{"output": ...}` records.

mod dataset;
mod json_store;

pub use dataset::{load_json_array, load_problems};
pub use json_store::JsonResultStore;
