//! Progress reporting for batch commands

pub mod reporter;
