pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod startup;
#[cfg(feature = "web-interface")]
pub mod web;
