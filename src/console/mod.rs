//! Console API client module
//!
//! The remote organization/project/workspace directory and its HTTP implementation.

mod api;
mod client;
mod credentials;
pub mod models;
pub mod traits;

pub use client::ConsoleClient;
pub use credentials::TokenResolver;
pub use models::{EntityId, OrgSummary, OrgType, Organization, Project, Workspace};
pub use traits::{ConsoleResource, RemoteDirectory};
