//! Command handlers.

pub mod apply;
