//! The OrganizationMemberships resource.

use std::collections::HashMap;

use crate::client::ZendeskClient;
use crate::clients::HttpMethod;
use crate::rest::chain::{ResourceChain, ResourceKind};
use crate::rest::operations::{Deletable, Findable, Listable, ResourceHandle};
use crate::rest::routes::{Route, RouteError, RouteKind, RouteSet};

/// Handle for the OrganizationMemberships endpoints.
///
/// Memberships link users to organizations, so the collection can be listed
/// flat or scoped under either parent:
///
/// - `organization_memberships.json`
/// - `users/{user_id}/organization_memberships.json`
/// - `organizations/{organization_id}/organization_memberships.json`
#[derive(Debug)]
pub struct OrganizationMemberships<'a> {
    client: &'a ZendeskClient,
    chain: ResourceChain,
    routes: RouteSet,
}

impl<'a> OrganizationMemberships<'a> {
    /// Creates a handle scoped under `chain`.
    #[must_use]
    pub fn new(client: &'a ZendeskClient, chain: ResourceChain) -> Self {
        Self {
            client,
            chain,
            routes: RouteSet::defaults(ResourceKind::OrganizationMemberships.name()),
        }
    }
}

impl ResourceHandle for OrganizationMemberships<'_> {
    const KIND: ResourceKind = ResourceKind::OrganizationMemberships;

    fn client(&self) -> &ZendeskClient {
        self.client
    }

    fn routes(&self) -> &RouteSet {
        &self.routes
    }

    fn chain(&self) -> &ResourceChain {
        &self.chain
    }
}

impl Listable for OrganizationMemberships<'_> {
    /// Memberships are listed under whichever supported parent the handle
    /// was reached through; an unsupported parent falls back to the flat
    /// collection with a warning.
    fn list_route(&self) -> Result<String, RouteError> {
        let nested = |template: &'static str, id: u64| {
            let route = Route::new(RouteKind::List, HttpMethod::Get, template);
            let tokens = HashMap::from([("parent_id", id.to_string())]);
            route.resolve(&tokens)
        };

        match self.chain.latest() {
            None => self.routes.resolve(RouteKind::List, &HashMap::new()),
            Some(link) if link.kind == ResourceKind::Users => {
                nested("users/{parent_id}/organization_memberships.json", link.id)
            }
            Some(link) if link.kind == ResourceKind::Organizations => nested(
                "organizations/{parent_id}/organization_memberships.json",
                link.id,
            ),
            Some(link) => {
                tracing::warn!(
                    parent = link.kind.name(),
                    parent_id = link.id,
                    "organization memberships cannot be listed under this parent; \
                     falling back to the unscoped collection"
                );
                self.routes.resolve(RouteKind::List, &HashMap::new())
            }
        }
    }
}

impl Findable for OrganizationMemberships<'_> {}
impl Deletable for OrganizationMemberships<'_> {}
