//! The Users resource.

use crate::client::ZendeskClient;
use crate::rest::chain::{ChainLink, ResourceChain, ResourceKind};
use crate::rest::operations::{
    Creatable, Deletable, Findable, Listable, ResourceHandle, Updatable,
};
use crate::rest::resources::{OrganizationMemberships, Organizations};
use crate::rest::routes::RouteSet;

/// Handle for the Users endpoints.
///
/// Besides its own CRUD surface, a user is the parent scope for chained
/// accessors: [`organizations`](Self::organizations) lists the
/// organizations one user belongs to, and
/// [`organization_memberships`](Self::organization_memberships) lists the
/// membership records themselves.
#[derive(Debug)]
pub struct Users<'a> {
    client: &'a ZendeskClient,
    chain: ResourceChain,
    routes: RouteSet,
}

impl<'a> Users<'a> {
    /// Creates a handle scoped under `chain`.
    #[must_use]
    pub fn new(client: &'a ZendeskClient, chain: ResourceChain) -> Self {
        Self {
            client,
            chain,
            routes: RouteSet::defaults(ResourceKind::Users.name()),
        }
    }

    /// Returns an [`Organizations`] handle scoped to one user.
    ///
    /// Listing through the returned handle resolves to
    /// `users/{user_id}/organizations.json`.
    #[must_use]
    pub fn organizations(&self, user_id: u64) -> Organizations<'a> {
        Organizations::new(
            self.client,
            self.chain
                .scoped(ChainLink::new(ResourceKind::Users, user_id)),
        )
    }

    /// Returns an [`OrganizationMemberships`] handle scoped to one user.
    #[must_use]
    pub fn organization_memberships(&self, user_id: u64) -> OrganizationMemberships<'a> {
        OrganizationMemberships::new(
            self.client,
            self.chain
                .scoped(ChainLink::new(ResourceKind::Users, user_id)),
        )
    }
}

impl ResourceHandle for Users<'_> {
    const KIND: ResourceKind = ResourceKind::Users;
    const SUB_RESOURCES: &'static [(&'static str, ResourceKind)] = &[
        ("organizations", ResourceKind::Organizations),
        (
            "organization_memberships",
            ResourceKind::OrganizationMemberships,
        ),
    ];

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

impl Listable for Users<'_> {}
impl Findable for Users<'_> {}
impl Creatable for Users<'_> {}
impl Updatable for Users<'_> {}
impl Deletable for Users<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ApiTokenAuth;
    use crate::config::{Subdomain, ZendeskConfig};
    use crate::rest::routes::RouteKind;
    use std::collections::HashMap;

    fn create_test_client() -> ZendeskClient {
        let config = ZendeskConfig::builder()
            .subdomain(Subdomain::new("test-company").unwrap())
            .build()
            .unwrap();
        let auth = ApiTokenAuth::new("agent@example.com", "test-token").unwrap();
        ZendeskClient::new(&config, auth)
    }

    #[test]
    fn test_default_routes() {
        let client = create_test_client();
        let users = Users::new(&client, ResourceChain::new());

        assert_eq!(users.list_route().unwrap(), "users.json");
        let tokens = HashMap::from([("id", "7".to_string())]);
        assert_eq!(
            users.routes().resolve(RouteKind::Find, &tokens).unwrap(),
            "users/7.json"
        );
    }

    #[test]
    fn test_organizations_accessor_extends_chain() {
        let client = create_test_client();
        let users = Users::new(&client, ResourceChain::new());
        let organizations = users.organizations(5);

        assert_eq!(
            organizations.chain().latest(),
            Some(ChainLink::new(ResourceKind::Users, 5))
        );
    }

    #[test]
    fn test_sub_resource_declaration() {
        let client = create_test_client();
        let users = Users::new(&client, ResourceChain::new());

        assert_eq!(
            users.sub_resource("organizations"),
            Some(ResourceKind::Organizations)
        );
        assert_eq!(
            users.sub_resource("organization_memberships"),
            Some(ResourceKind::OrganizationMemberships)
        );
        assert_eq!(users.sub_resource("tickets"), None);
    }
}
