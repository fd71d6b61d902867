//! Typed route descriptors for REST resources.
//!
//! Each resource owns a [`RouteSet`]: a table mapping operation kinds to
//! path templates with `{token}` placeholders. The required token set is
//! parsed out of the template when a [`Route`] is constructed, so a
//! descriptor is validated once at construction rather than on every call.
//! Resolution substitutes tokens from call parameters and fails fast when a
//! required token is absent — a malformed path is never produced.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use zendesk_api::rest::{RouteKind, RouteSet};
//!
//! let routes = RouteSet::defaults("organizations");
//!
//! let path = routes.resolve(RouteKind::List, &HashMap::new()).unwrap();
//! assert_eq!(path, "organizations.json");
//!
//! let mut params = HashMap::new();
//! params.insert("id", "42".to_string());
//! let path = routes.resolve(RouteKind::Find, &params).unwrap();
//! assert_eq!(path, "organizations/42.json");
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::clients::HttpMethod;

/// Operations a route table can describe.
///
/// The fixed variants cover the shared CRUD defaults and the bulk
/// operations; `Custom` names per-resource verbs such as `autocomplete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// List the collection (GET `{resource}.json`).
    List,
    /// Fetch a single resource (GET `{resource}/{id}.json`).
    Find,
    /// Create a resource (POST `{resource}.json`).
    Create,
    /// Update a resource (PUT `{resource}/{id}.json`).
    Update,
    /// Delete a resource (DELETE `{resource}/{id}.json`).
    Delete,
    /// Create several resources in one call.
    CreateMany,
    /// Update several resources in one call.
    UpdateMany,
    /// Delete several resources in one call.
    DeleteMany,
    /// Fetch several resources by id in one call.
    FindMany,
    /// A per-resource verb (e.g. `autocomplete`, `related`, `search`).
    Custom(&'static str),
}

impl RouteKind {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::CreateMany => "create_many",
            Self::UpdateMany => "update_many",
            Self::DeleteMany => "delete_many",
            Self::FindMany => "find_many",
            Self::Custom(name) => name,
        }
    }
}

/// A typed route descriptor: operation kind, HTTP method, path template.
///
/// The required token set is parsed from the template at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// The operation this route serves.
    pub kind: RouteKind,
    /// The HTTP method this route is dispatched with.
    pub http_method: HttpMethod,
    /// The path template with `{token}` placeholders.
    pub template: String,
    tokens: Vec<String>,
}

impl Route {
    /// Creates a new route, parsing the required tokens from the template.
    #[must_use]
    pub fn new(kind: RouteKind, http_method: HttpMethod, template: impl Into<String>) -> Self {
        let template = template.into();
        let tokens = parse_tokens(&template);
        Self {
            kind,
            http_method,
            template,
            tokens,
        }
    }

    /// Returns the token names this route requires, in template order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Substitutes `{token}` placeholders from `params` and returns the
    /// concrete path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingToken`] when a required token is absent
    /// from `params` — a caller error surfaced before any request is built.
    pub fn resolve(&self, params: &HashMap<&str, String>) -> Result<String, RouteError> {
        let mut path = self.template.clone();
        for token in &self.tokens {
            let value =
                params
                    .get(token.as_str())
                    .ok_or_else(|| RouteError::MissingToken {
                        token: token.clone(),
                        template: self.template.clone(),
                    })?;
            path = path.replace(&format!("{{{token}}}"), value);
        }
        Ok(path)
    }
}

/// Parses `{token}` placeholder names out of a path template.
fn parse_tokens(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        tokens.push(rest[start + 1..start + end].to_string());
        rest = &rest[start + end + 1..];
    }
    tokens
}

/// A per-resource route table.
///
/// Built from the shared CRUD defaults and extended with resource-specific
/// routes via [`with`](Self::with).
#[derive(Clone, Debug)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Creates the shared default CRUD table for a resource name.
    #[must_use]
    pub fn defaults(name: &str) -> Self {
        Self {
            routes: vec![
                Route::new(RouteKind::List, HttpMethod::Get, format!("{name}.json")),
                Route::new(
                    RouteKind::Find,
                    HttpMethod::Get,
                    format!("{name}/{{id}}.json"),
                ),
                Route::new(RouteKind::Create, HttpMethod::Post, format!("{name}.json")),
                Route::new(
                    RouteKind::Update,
                    HttpMethod::Put,
                    format!("{name}/{{id}}.json"),
                ),
                Route::new(
                    RouteKind::Delete,
                    HttpMethod::Delete,
                    format!("{name}/{{id}}.json"),
                ),
            ],
        }
    }

    /// Adds a route, replacing any earlier route for the same kind.
    #[must_use]
    pub fn with(mut self, route: Route) -> Self {
        self.routes.retain(|existing| existing.kind != route.kind);
        self.routes.push(route);
        self
    }

    /// Returns the route registered for `kind`, if any.
    #[must_use]
    pub fn get(&self, kind: RouteKind) -> Option<&Route> {
        self.routes.iter().find(|route| route.kind == kind)
    }

    /// Resolves the route for `kind` against `params`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownOperation`] when no route is registered
    /// for `kind`, or [`RouteError::MissingToken`] when a required token is
    /// absent from `params`.
    pub fn resolve(
        &self,
        kind: RouteKind,
        params: &HashMap<&str, String>,
    ) -> Result<String, RouteError> {
        self.get(kind)
            .ok_or(RouteError::UnknownOperation {
                operation: kind.as_str(),
            })?
            .resolve(params)
    }
}

/// Error type for route resolution.
///
/// Both variants are caller errors and surface before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route is registered for the requested operation.
    #[error("No route registered for operation '{operation}'.")]
    UnknownOperation {
        /// The operation that was requested.
        operation: &'static str,
    },

    /// A required route token was absent from the call parameters.
    #[error("Route template '{template}' requires token '{token}' which was not provided.")]
    MissingToken {
        /// The missing token name.
        token: String,
        /// The template that required it.
        template: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_crud() {
        let routes = RouteSet::defaults("organizations");

        assert_eq!(
            routes.get(RouteKind::List).unwrap().template,
            "organizations.json"
        );
        assert_eq!(
            routes.get(RouteKind::Find).unwrap().template,
            "organizations/{id}.json"
        );
        assert_eq!(
            routes.get(RouteKind::Create).unwrap().http_method,
            HttpMethod::Post
        );
        assert_eq!(
            routes.get(RouteKind::Update).unwrap().http_method,
            HttpMethod::Put
        );
        assert_eq!(
            routes.get(RouteKind::Delete).unwrap().http_method,
            HttpMethod::Delete
        );
    }

    #[test]
    fn test_tokens_parsed_at_construction() {
        let route = Route::new(
            RouteKind::Custom("related"),
            HttpMethod::Get,
            "organizations/{id}/related.json",
        );
        assert_eq!(route.tokens(), ["id"]);

        let route = Route::new(
            RouteKind::List,
            HttpMethod::Get,
            "users/{user_id}/organization_memberships.json",
        );
        assert_eq!(route.tokens(), ["user_id"]);

        let route = Route::new(RouteKind::List, HttpMethod::Get, "organizations.json");
        assert!(route.tokens().is_empty());
    }

    #[test]
    fn test_resolve_substitutes_tokens() {
        let route = Route::new(
            RouteKind::Custom("related"),
            HttpMethod::Get,
            "organizations/{id}/related.json",
        );
        let mut params = HashMap::new();
        params.insert("id", "42".to_string());

        assert_eq!(
            route.resolve(&params).unwrap(),
            "organizations/42/related.json"
        );
    }

    #[test]
    fn test_resolve_fails_fast_on_missing_token() {
        let routes = RouteSet::defaults("organizations");
        let result = routes.resolve(RouteKind::Find, &HashMap::new());

        assert!(matches!(
            result,
            Err(RouteError::MissingToken { token, .. }) if token == "id"
        ));
    }

    #[test]
    fn test_resolve_unknown_operation() {
        let routes = RouteSet::defaults("organizations");
        let result = routes.resolve(RouteKind::Custom("autocomplete"), &HashMap::new());

        assert!(matches!(
            result,
            Err(RouteError::UnknownOperation {
                operation: "autocomplete"
            })
        ));
    }

    #[test]
    fn test_with_replaces_same_kind() {
        let routes = RouteSet::defaults("organizations").with(Route::new(
            RouteKind::List,
            HttpMethod::Get,
            "organizations/custom.json",
        ));

        assert_eq!(
            routes.get(RouteKind::List).unwrap().template,
            "organizations/custom.json"
        );
        // The other defaults are untouched.
        assert!(routes.get(RouteKind::Find).is_some());
    }

    #[test]
    fn test_route_kind_as_str() {
        assert_eq!(RouteKind::List.as_str(), "list");
        assert_eq!(RouteKind::CreateMany.as_str(), "create_many");
        assert_eq!(RouteKind::Custom("autocomplete").as_str(), "autocomplete");
    }

    #[test]
    fn test_multiple_tokens_substituted_in_order() {
        let route = Route::new(
            RouteKind::Find,
            HttpMethod::Get,
            "users/{user_id}/identities/{id}.json",
        );
        let mut params = HashMap::new();
        params.insert("user_id", "7".to_string());
        params.insert("id", "3".to_string());

        assert_eq!(route.resolve(&params).unwrap(), "users/7/identities/3.json");
        assert_eq!(route.tokens(), ["user_id", "id"]);
    }
}
