//! Progress reporting while a question is in flight

pub mod reporter;
