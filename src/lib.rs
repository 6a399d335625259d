pub mod actions;
pub mod api;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod ui;
