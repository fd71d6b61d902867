//! Typed ancestor chains for nested resource calls.
//!
//! A call like "organizations belonging to user 5" is scoped under a parent
//! resource. The chain is an explicit, ordered value threaded through calls:
//! route resolvers inspect it, they never mutate it.

/// The resource types this SDK exposes.
///
/// Used as the typed tag in [`ChainLink`] and in sub-resource declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Zendesk organizations.
    Organizations,
    /// Zendesk users (agents and end users).
    Users,
    /// Zendesk tickets.
    Tickets,
    /// Memberships linking users to organizations.
    OrganizationMemberships,
}

impl ResourceKind {
    /// Returns the plural resource name used in URL paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Organizations => "organizations",
            Self::Users => "users",
            Self::Tickets => "tickets",
            Self::OrganizationMemberships => "organization_memberships",
        }
    }

    /// Returns the singular name used as the JSON body key.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Organizations => "organization",
            Self::Users => "user",
            Self::Tickets => "ticket",
            Self::OrganizationMemberships => "organization_membership",
        }
    }
}

/// One entry of a resource chain: a parent resource type and its id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainLink {
    /// The parent resource type.
    pub kind: ResourceKind,
    /// The parent resource id.
    pub id: u64,
}

impl ChainLink {
    /// Creates a new chain link.
    #[must_use]
    pub const fn new(kind: ResourceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

/// An ordered sequence of parent resources a call is nested under.
///
/// Chains are consumed once per route resolution and never mutated by the
/// resolver; [`scoped`](Self::scoped) returns an extended copy so a handle
/// can derive child handles without touching its own chain.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::{ChainLink, ResourceChain, ResourceKind};
///
/// let chain = ResourceChain::new().scoped(ChainLink::new(ResourceKind::Users, 5));
/// assert_eq!(chain.latest().unwrap().id, 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceChain {
    links: Vec<ChainLink>,
}

impl ResourceChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Returns a copy of this chain with `link` appended.
    #[must_use]
    pub fn scoped(&self, link: ChainLink) -> Self {
        let mut links = self.links.clone();
        links.push(link);
        Self { links }
    }

    /// Returns the most recently appended link, if any.
    #[must_use]
    pub fn latest(&self) -> Option<ChainLink> {
        self.links.last().copied()
    }

    /// Returns `true` when no parent scope is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the number of links in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }
}
