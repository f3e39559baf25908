//! Condafind - resolve package names to conda install commands
//!
//! This library resolves the name of a software package to a concrete,
//! channel-qualified `conda install` command by querying anaconda.org's
//! search interface, selecting a channel according to a priority policy,
//! and extracting the install directive from the channel's package page.
//!
//! The pipeline is synchronous and single-threaded: one resolution in
//! flight at a time, with network retries and backoff handled inside
//! [`http::Fetcher`]. Executing the resolved command is left to the
//! caller.

pub mod command;
pub mod config;
pub mod document;
pub mod http;
pub mod resolver;

pub use command::InstallCommand;
pub use config::{Endpoints, FetchConfig, ResolverConfig};
pub use http::{HttpClient, ReqwestClient};
pub use resolver::{Resolution, ResolveError, Resolver, DEFAULT_CHANNELS};

/// Crate version, from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
