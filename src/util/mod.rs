//! Utilities shared by the binary: timing and result verification

pub mod time;
pub mod verification;
