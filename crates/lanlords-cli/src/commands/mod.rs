//! Command handlers grouped by CLI verb.

pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod game;
pub(crate) mod server;
