// Composition root for the report tool.
//
// Responsibilities
// - Read config from a TOML file or the environment.
// - Instantiate the report sink the caller asked for.
// - Wire config and sink into use case handlers, from the command line or over HTTP.

pub mod cli;
pub mod config;
pub mod http;
pub mod state;
