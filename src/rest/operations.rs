//! Capability traits for REST resource operations.
//!
//! Resources implement [`ResourceHandle`] plus whichever capability traits
//! their endpoints support: [`Listable`], [`Findable`], [`Creatable`],
//! [`Updatable`], [`Deletable`], and the bulk variants. Each capability
//! provides a default implementation following the same three-step shape:
//!
//! 1. compute the side-load list from caller params via the client's
//!    side-load accessor,
//! 2. build query parameters with
//!    [`prepare_query_params`](crate::clients::prepare_query_params) plus
//!    any verb-specific required field,
//! 3. resolve the route and dispatch, returning the envelope unchanged.
//!
//! Chain-aware resources override [`Listable::list_route`] to pick a nested
//! path from their [`ResourceChain`](crate::rest::ResourceChain).

use std::collections::HashMap;

use crate::client::ZendeskClient;
use crate::clients::{prepare_query_params, ApiResponse};
use crate::error::Error;
use crate::rest::chain::{ResourceChain, ResourceKind};
use crate::rest::routes::{RouteError, RouteKind, RouteSet};

/// Joins ids into the comma-separated form the bulk endpoints expect.
fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps fields under the resource's JSON body key.
fn keyed_body(key: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), fields);
    serde_json::Value::Object(body)
}

/// The base capability every resource handle implements.
///
/// A handle is a cheap, short-lived view pairing a client with a route
/// table and the ancestor chain it was reached through.
pub trait ResourceHandle {
    /// The resource type this handle operates on.
    const KIND: ResourceKind;

    /// Sub-resources this handle exposes chained accessors for, as
    /// (short name, resource type) pairs.
    const SUB_RESOURCES: &'static [(&'static str, ResourceKind)] = &[];

    /// Returns the client this handle dispatches through.
    fn client(&self) -> &ZendeskClient;

    /// Returns this resource's route table.
    fn routes(&self) -> &RouteSet;

    /// Returns the ancestor chain this handle was reached through.
    fn chain(&self) -> &ResourceChain;

    /// Looks up a declared sub-resource by its short name.
    fn sub_resource(&self, name: &str) -> Option<ResourceKind> {
        Self::SUB_RESOURCES
            .iter()
            .find(|(short, _)| *short == name)
            .map(|(_, kind)| *kind)
    }
}

/// Collection listing.
#[allow(async_fn_in_trait)]
pub trait Listable: ResourceHandle {
    /// Resolves the collection path for this handle.
    ///
    /// The default ignores the chain; chain-aware resources override this
    /// to return a nested path for supported parent types.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when no listing route is registered.
    fn list_route(&self) -> Result<String, RouteError> {
        self.routes().resolve(RouteKind::List, &HashMap::new())
    }

    /// Lists the collection.
    ///
    /// Side-loads and whitelisted iterator options are taken from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn list(&self, params: &HashMap<String, String>) -> Result<ApiResponse, Error> {
        let route = self.list_route()?;
        let sideload = self.client().sideload(params);
        let query = prepare_query_params(sideload.as_deref(), Some(params));
        self.client().get(&route, query).await
    }
}

/// Single-resource fetch.
#[allow(async_fn_in_trait)]
pub trait Findable: ResourceHandle {
    /// Fetches a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn find(&self, id: u64, params: &HashMap<String, String>) -> Result<ApiResponse, Error> {
        let tokens = HashMap::from([("id", id.to_string())]);
        let route = self.routes().resolve(RouteKind::Find, &tokens)?;
        let sideload = self.client().sideload(params);
        let query = prepare_query_params(sideload.as_deref(), Some(params));
        self.client().get(&route, query).await
    }
}

/// Resource creation.
#[allow(async_fn_in_trait)]
pub trait Creatable: ResourceHandle {
    /// Creates a resource from `fields`, wrapped under the singular body
    /// key (e.g. `{"organization": {...}}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn create(&self, fields: serde_json::Value) -> Result<ApiResponse, Error> {
        let route = self.routes().resolve(RouteKind::Create, &HashMap::new())?;
        let body = keyed_body(Self::KIND.singular(), fields);
        self.client().post(&route, body).await
    }
}

/// Resource update.
#[allow(async_fn_in_trait)]
pub trait Updatable: ResourceHandle {
    /// Updates the resource `id` with `fields`, wrapped under the singular
    /// body key.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn update(&self, id: u64, fields: serde_json::Value) -> Result<ApiResponse, Error> {
        let tokens = HashMap::from([("id", id.to_string())]);
        let route = self.routes().resolve(RouteKind::Update, &tokens)?;
        let body = keyed_body(Self::KIND.singular(), fields);
        self.client().put(&route, body).await
    }
}

/// Resource deletion.
#[allow(async_fn_in_trait)]
pub trait Deletable: ResourceHandle {
    /// Deletes the resource `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn delete(&self, id: u64) -> Result<ApiResponse, Error> {
        let tokens = HashMap::from([("id", id.to_string())]);
        let route = self.routes().resolve(RouteKind::Delete, &tokens)?;
        self.client().delete(&route, HashMap::new()).await
    }
}

/// Bulk fetch by id.
#[allow(async_fn_in_trait)]
pub trait FindMany: ResourceHandle {
    /// Fetches several resources in one call via their ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn find_many(&self, ids: &[u64]) -> Result<ApiResponse, Error> {
        let route = self.routes().resolve(RouteKind::FindMany, &HashMap::new())?;
        let query = HashMap::from([("ids".to_string(), join_ids(ids))]);
        self.client().get(&route, query).await
    }
}

/// Bulk creation.
#[allow(async_fn_in_trait)]
pub trait CreateMany: ResourceHandle {
    /// Creates several resources in one call, wrapped under the plural body
    /// key (e.g. `{"organizations": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn create_many(&self, fields: Vec<serde_json::Value>) -> Result<ApiResponse, Error> {
        let route = self
            .routes()
            .resolve(RouteKind::CreateMany, &HashMap::new())?;
        let body = keyed_body(Self::KIND.name(), serde_json::Value::Array(fields));
        self.client().post(&route, body).await
    }
}

/// Bulk update.
#[allow(async_fn_in_trait)]
pub trait UpdateMany: ResourceHandle {
    /// Updates several resources in one call, wrapped under the plural body
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn update_many(&self, fields: Vec<serde_json::Value>) -> Result<ApiResponse, Error> {
        let route = self
            .routes()
            .resolve(RouteKind::UpdateMany, &HashMap::new())?;
        let body = keyed_body(Self::KIND.name(), serde_json::Value::Array(fields));
        self.client().put(&route, body).await
    }
}

/// Bulk deletion.
#[allow(async_fn_in_trait)]
pub trait DeleteMany: ResourceHandle {
    /// Deletes several resources in one call via their ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    async fn delete_many(&self, ids: &[u64]) -> Result<ApiResponse, Error> {
        let route = self
            .routes()
            .resolve(RouteKind::DeleteMany, &HashMap::new())?;
        let query = HashMap::from([("ids".to_string(), join_ids(ids))]);
        self.client().delete(&route, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 2, 3]), "1,2,3");
        assert_eq!(join_ids(&[42]), "42");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn test_keyed_body_wraps_fields() {
        let body = keyed_body("organization", serde_json::json!({"name": "Acme"}));
        assert_eq!(body["organization"]["name"], "Acme");
    }
}
