//! Resource façades for the Zendesk API.
//!
//! Each resource pairs the shared CRUD defaults with its own routes and
//! chained accessors. Handles are obtained from
//! [`ZendeskClient`](crate::client::ZendeskClient) accessors or from a
//! parent resource's chained accessor.

mod organization_memberships;
mod organizations;
mod tickets;
mod users;

pub use organization_memberships::OrganizationMemberships;
pub use organizations::Organizations;
pub use tickets::Tickets;
pub use users::Users;
