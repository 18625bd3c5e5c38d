// Frameworks: runtime bootstrap and environment configuration.

pub mod config;
pub mod demo;
pub mod runtime;
