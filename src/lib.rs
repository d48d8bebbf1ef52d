// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod divisions;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;

pub mod file;
pub mod log;
pub mod net;
pub mod progress;
pub mod runner;

pub use error::{Error, Result};
