//! The Tickets resource.

use crate::client::ZendeskClient;
use crate::rest::chain::{ResourceChain, ResourceKind};
use crate::rest::operations::{
    Creatable, Deletable, Findable, Listable, ResourceHandle, Updatable,
};
use crate::rest::routes::RouteSet;

/// Handle for the Tickets endpoints.
#[derive(Debug)]
pub struct Tickets<'a> {
    client: &'a ZendeskClient,
    chain: ResourceChain,
    routes: RouteSet,
}

impl<'a> Tickets<'a> {
    /// Creates a handle scoped under `chain`.
    #[must_use]
    pub fn new(client: &'a ZendeskClient, chain: ResourceChain) -> Self {
        Self {
            client,
            chain,
            routes: RouteSet::defaults(ResourceKind::Tickets.name()),
        }
    }
}

impl ResourceHandle for Tickets<'_> {
    const KIND: ResourceKind = ResourceKind::Tickets;

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

impl Listable for Tickets<'_> {}
impl Findable for Tickets<'_> {}
impl Creatable for Tickets<'_> {}
impl Updatable for Tickets<'_> {}
impl Deletable for Tickets<'_> {}
