//! Rating Calc - A command-line chess rating calculator.
//!
//! This crate is the calling layer around `rating-engine`: it parses and
//! validates user input, loads defaults from a config file, and renders
//! results.
//!
//! # Modules
//!
//! - [`config`] - `ratings.toml` loading
//! - [`input`] - Validation and request building
//! - [`output`] - Text and JSON rendering

pub mod config;
pub mod input;
pub mod output;
