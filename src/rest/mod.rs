//! REST resource infrastructure for the Zendesk API.
//!
//! This module provides the foundation resource façades are built on:
//!
//! - **[`RouteSet`] / [`Route`] / [`RouteKind`]**: typed route descriptors
//!   with construction-time token parsing and fail-fast resolution
//! - **[`ResourceChain`] / [`ChainLink`] / [`ResourceKind`]**: explicit,
//!   typed ancestor chains for nested calls
//! - **Capability traits**: [`Listable`], [`Findable`], [`Creatable`],
//!   [`Updatable`], [`Deletable`] and the bulk variants, each with a
//!   default implementation over [`ResourceHandle`]
//! - **[`resources`]**: the concrete resource façades
//!
//! # Example: nested listing through a chain
//!
//! ```rust,ignore
//! use zendesk_api::rest::Listable;
//!
//! // GET /api/v2/users/5/organizations.json
//! let response = client
//!     .users()
//!     .organizations(5)
//!     .list(&Default::default())
//!     .await?;
//! ```

mod chain;
mod operations;
mod routes;

pub mod resources;

pub use chain::{ChainLink, ResourceChain, ResourceKind};
pub use operations::{
    Creatable, CreateMany, Deletable, DeleteMany, Findable, FindMany, Listable, ResourceHandle,
    UpdateMany, Updatable,
};
pub use routes::{Route, RouteError, RouteKind, RouteSet};
