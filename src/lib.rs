//! MCP server for a craft project catalog.
//!
//! Exposes list, lookup, search, random-pick, and time-estimate tools over
//! the built-in craft catalog via JSON-RPC 2.0 stdio transport, compatible
//! with any MCP-aware AI agent.
//!
//! The query engine in [`query`] is usable on its own; [`server`] and
//! [`handlers`] are the tool-dispatch layer on top of it.

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod protocol;
pub mod query;
pub mod server;
pub mod tools;

pub mod schema;
