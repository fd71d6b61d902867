//! The Organizations resource.

use std::collections::HashMap;

use crate::client::ZendeskClient;
use crate::clients::{prepare_query_params, ApiResponse, HttpMethod};
use crate::error::Error;
use crate::rest::chain::{ChainLink, ResourceChain, ResourceKind};
use crate::rest::operations::{
    Creatable, CreateMany, Deletable, DeleteMany, Findable, FindMany, Listable, ResourceHandle,
    UpdateMany, Updatable,
};
use crate::rest::resources::OrganizationMemberships;
use crate::rest::routes::{Route, RouteError, RouteKind, RouteSet};

/// Handle for the Organizations endpoints.
///
/// Supports the full CRUD surface, the bulk operations, and the
/// organization-specific verbs `autocomplete`, `related`, and `search`.
/// Obtained from [`ZendeskClient::organizations`] for the flat collection,
/// or from [`Users::organizations`](crate::rest::resources::Users::organizations)
/// for the listing scoped to one user.
///
/// # Example
///
/// ```rust,ignore
/// // GET /api/v2/organizations.json
/// let all = client.organizations().list(&HashMap::new()).await?;
///
/// // GET /api/v2/users/5/organizations.json
/// let theirs = client.users().organizations(5).list(&HashMap::new()).await?;
/// ```
#[derive(Debug)]
pub struct Organizations<'a> {
    client: &'a ZendeskClient,
    chain: ResourceChain,
    routes: RouteSet,
}

impl<'a> Organizations<'a> {
    /// Creates a handle scoped under `chain`.
    ///
    /// Most callers obtain handles through [`ZendeskClient::organizations`]
    /// or a chained accessor instead of calling this directly.
    #[must_use]
    pub fn new(client: &'a ZendeskClient, chain: ResourceChain) -> Self {
        let name = ResourceKind::Organizations.name();
        let routes = RouteSet::defaults(name)
            .with(Route::new(
                RouteKind::CreateMany,
                HttpMethod::Post,
                format!("{name}/create_many.json"),
            ))
            .with(Route::new(
                RouteKind::UpdateMany,
                HttpMethod::Put,
                format!("{name}/update_many.json"),
            ))
            .with(Route::new(
                RouteKind::DeleteMany,
                HttpMethod::Delete,
                format!("{name}/destroy_many.json"),
            ))
            .with(Route::new(
                RouteKind::FindMany,
                HttpMethod::Get,
                format!("{name}/show_many.json"),
            ))
            .with(Route::new(
                RouteKind::Custom("autocomplete"),
                HttpMethod::Get,
                format!("{name}/autocomplete.json"),
            ))
            .with(Route::new(
                RouteKind::Custom("related"),
                HttpMethod::Get,
                format!("{name}/{{id}}/related.json"),
            ))
            .with(Route::new(
                RouteKind::Custom("search"),
                HttpMethod::Get,
                format!("{name}/search.json"),
            ));
        Self {
            client,
            chain,
            routes,
        }
    }

    /// Returns a handle for the memberships of one organization.
    #[must_use]
    pub fn memberships(&self, organization_id: u64) -> OrganizationMemberships<'a> {
        OrganizationMemberships::new(
            self.client,
            self.chain
                .scoped(ChainLink::new(ResourceKind::Organizations, organization_id)),
        )
    }

    /// Returns organizations whose name starts with `name`.
    ///
    /// The name must be at least 2 characters in length.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    pub async fn autocomplete(
        &self,
        name: &str,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let sideload = self.client.sideload(params);
        let mut query = prepare_query_params(sideload.as_deref(), Some(params));
        query.insert("name".to_string(), name.to_string());

        let route = self
            .routes
            .resolve(RouteKind::Custom("autocomplete"), &HashMap::new())?;
        self.client.get(&route, query).await
    }

    /// Shows an organization's related information.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    pub async fn related(&self, id: u64) -> Result<ApiResponse, Error> {
        let tokens = HashMap::from([("id", id.to_string())]);
        let route = self
            .routes
            .resolve(RouteKind::Custom("related"), &tokens)?;
        self.client.get(&route, HashMap::new()).await
    }

    /// Searches organizations by external id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on route resolution or dispatch failure.
    pub async fn search(
        &self,
        external_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<ApiResponse, Error> {
        let sideload = self.client.sideload(params);
        let mut query = prepare_query_params(sideload.as_deref(), Some(params));
        query.insert("external_id".to_string(), external_id.to_string());

        let route = self
            .routes
            .resolve(RouteKind::Custom("search"), &HashMap::new())?;
        self.client.get(&route, query).await
    }
}

impl ResourceHandle for Organizations<'_> {
    const KIND: ResourceKind = ResourceKind::Organizations;
    const SUB_RESOURCES: &'static [(&'static str, ResourceKind)] =
        &[("memberships", ResourceKind::OrganizationMemberships)];

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

impl Listable for Organizations<'_> {
    /// Collection listing is chain-aware: under a `users` parent the nested
    /// path is used; any other parent falls back to the flat collection.
    ///
    /// The fallback means chaining under an unsupported parent silently
    /// returns the unscoped listing; a warning is logged when it happens.
    fn list_route(&self) -> Result<String, RouteError> {
        match self.chain.latest() {
            None => self.routes.resolve(RouteKind::List, &HashMap::new()),
            Some(link) if link.kind == ResourceKind::Users => {
                let nested = Route::new(
                    RouteKind::List,
                    HttpMethod::Get,
                    "users/{parent_id}/organizations.json",
                );
                let tokens = HashMap::from([("parent_id", link.id.to_string())]);
                nested.resolve(&tokens)
            }
            Some(link) => {
                tracing::warn!(
                    parent = link.kind.name(),
                    parent_id = link.id,
                    "organizations cannot be listed under this parent; \
                     falling back to the unscoped collection"
                );
                self.routes.resolve(RouteKind::List, &HashMap::new())
            }
        }
    }
}

impl Findable for Organizations<'_> {}
impl Creatable for Organizations<'_> {}
impl Updatable for Organizations<'_> {}
impl Deletable for Organizations<'_> {}
impl FindMany for Organizations<'_> {}
impl CreateMany for Organizations<'_> {}
impl UpdateMany for Organizations<'_> {}
impl DeleteMany for Organizations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiTokenAuth;
    use crate::config::{Subdomain, ZendeskConfig};

    fn create_test_client() -> ZendeskClient {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("test-company").unwrap())
            .build()
            .unwrap();
        let auth = ApiTokenAuth::new("agent@example.com", "test-token").unwrap();
        ZendeskClient::new(&config, auth)
    }

    #[test]
    fn test_list_route_with_empty_chain_is_flat() {
        let client = create_test_client();
        let organizations = Organizations::new(&client, ResourceChain::new());
        assert_eq!(organizations.list_route().unwrap(), "organizations.json");
    }

    #[test]
    fn test_list_route_under_users_parent_is_nested() {
        let client = create_test_client();
        let chain = ResourceChain::new().scoped(ChainLink::new(ResourceKind::Users, 5));
        let organizations = Organizations::new(&client, chain);
        assert_eq!(
            organizations.list_route().unwrap(),
            "users/5/organizations.json"
        );
    }

    #[test]
    fn test_list_route_under_unsupported_parent_falls_back_to_flat() {
        let client = create_test_client();
        let chain = ResourceChain::new().scoped(ChainLink::new(ResourceKind::Tickets, 9));
        let organizations = Organizations::new(&client, chain);
        assert_eq!(organizations.list_route().unwrap(), "organizations.json");
    }

    #[test]
    fn test_find_route_unaffected_by_chain() {
        let client = create_test_client();
        let chain = ResourceChain::new().scoped(ChainLink::new(ResourceKind::Users, 5));
        let organizations = Organizations::new(&client, chain);

        let tokens = HashMap::from([("id", "42".to_string())]);
        assert_eq!(
            organizations
                .routes()
                .resolve(RouteKind::Find, &tokens)
                .unwrap(),
            "organizations/42.json"
        );
    }

    #[test]
    fn test_custom_routes_registered() {
        let client = create_test_client();
        let organizations = Organizations::new(&client, ResourceChain::new());

        assert_eq!(
            organizations
                .routes()
                .get(RouteKind::Custom("autocomplete"))
                .unwrap()
                .template,
            "organizations/autocomplete.json"
        );
        assert_eq!(
            organizations
                .routes()
                .get(RouteKind::Custom("related"))
                .unwrap()
                .template,
            "organizations/{id}/related.json"
        );
        assert_eq!(
            organizations
                .routes()
                .get(RouteKind::Custom("search"))
                .unwrap()
                .template,
            "organizations/search.json"
        );
    }

    #[test]
    fn test_sub_resource_declaration() {
        let client = create_test_client();
        let organizations = Organizations::new(&client, ResourceChain::new());

        assert_eq!(
            organizations.sub_resource("memberships"),
            Some(ResourceKind::OrganizationMemberships)
        );
        assert_eq!(organizations.sub_resource("subscriptions"), None);
    }
}
