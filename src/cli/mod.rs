//! Command-line front end: argument-independent command bodies and settings.

pub mod commands;
pub mod config;
