//! taskline CLI library - modules exposed for unit tests

pub mod app;
pub mod commands;
pub mod logging;
pub mod render;
