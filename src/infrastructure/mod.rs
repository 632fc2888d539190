//! Infrastructure layer - Process-level plumbing

pub mod logging;
