//! Result output: console text and JSON reports

pub mod json;
pub mod text;
