//! Reasoning MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server whose central
//! tool is a stateful sequential-thinking session: callers submit reasoning
//! steps one tool call at a time and the server validates, stores, and
//! indexes them into an ordered, branchable history.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **thinking**: the stateful reasoning session (record, session, formatter)
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use reasoning_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
