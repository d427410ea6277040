//! Minimal blocking client for Github's REST v3 API
//! https://developer.github.com/v3/
//!
//! Resources come back as read-only wrappers over the raw JSON payload:
//! accessors return `Option` and absent fields are never an error. One
//! blocking HTTP request per client method, no pagination, no retries.

pub mod client;
mod commit;
mod common;
mod events;
mod issues;
mod release;
mod repo;
mod route;
mod traffic;
mod user;

pub use client::{Client, ClientBuilder, Error, Result, Transport};
pub use commit::Commit;
pub use common::Fields;
pub use events::Event;
pub use issues::{Issue, Label, Milestone};
pub use release::Release;
pub use repo::{Branch, Repository};
pub use route::Route;
pub use traffic::Traffic;
