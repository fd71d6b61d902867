//! Integration tests for the resource façades.
//!
//! These tests drive the Organizations façade (and its chained relatives)
//! end-to-end against a wiremock server: route resolution, side-load and
//! iterator query building, verb-specific required parameters, and body
//! key wrapping.

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zendesk_api::auth::ApiTokenAuth;
use zendesk_api::rest::{
    Creatable, CreateMany, Deletable, DeleteMany, Findable, FindMany, Listable, UpdateMany,
    Updatable,
};
use zendesk_api::{ApiBaseUrl, ZendeskClient, ZendeskConfig};

/// Creates a client pointed at the given mock server.
fn create_test_client(server_uri: &str) -> ZendeskClient {
    let config = ZendeskConfig::builder()
        .api_url(ApiBaseUrl::new(format!("{server_uri}/api/v2")).unwrap())
        .build()
        .unwrap();
    let auth = ApiTokenAuth::new("agent@example.com", "test-token").unwrap();
    ZendeskClient::new(&config, auth)
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_hits_flat_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organizations": [], "count": 0, "next_page": null})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .list(&HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.count(), Some(0));
    assert!(response.next_page().is_none());
}

#[tokio::test]
async fn test_list_chained_under_user_hits_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/5/organizations.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"organizations": [{"id": 1}]})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .users()
        .organizations(5)
        .list(&HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.body["organizations"][0]["id"], 1);
}

#[tokio::test]
async fn test_list_builds_sideload_and_iterator_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations.json"))
        .and(query_param("include", "users,groups"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organizations": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let mut params = HashMap::new();
    params.insert("sideload".to_string(), "users,groups".to_string());
    params.insert("per_page".to_string(), "50".to_string());
    params.insert("favorite_color".to_string(), "purple".to_string());

    let response = client.organizations().list(&params).await.unwrap();
    assert_eq!(response.status, 200);

    // Keys outside the iterator whitelist never reach the wire.
    let requests = server.received_requests().await.unwrap();
    let query: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert!(query.iter().all(|(k, _)| k != "favorite_color"));
    assert!(query.iter().all(|(k, _)| k != "sideload"));
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_find_resolves_id_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/42.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organization": {"id": 42, "name": "Acme"}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .find(42, &HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.body["organization"]["name"], "Acme");
}

#[tokio::test]
async fn test_create_wraps_fields_under_singular_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/organizations.json"))
        .and(body_json(json!({"organization": {"name": "Acme"}})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"organization": {"id": 1, "name": "Acme"}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .create(json!({"name": "Acme"}))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_update_puts_to_id_route() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/organizations/42.json"))
        .and(body_json(json!({"organization": {"notes": "vip"}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organization": {"id": 42, "notes": "vip"}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .update(42, json!({"notes": "vip"}))
        .await
        .unwrap();

    assert_eq!(response.body["organization"]["notes"], "vip");
}

#[tokio::test]
async fn test_delete_returns_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/organizations/42.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client.organizations().delete(42).await.unwrap();

    assert_eq!(response.status, 204);
    assert!(response.body.is_null());
}

// ============================================================================
// Bulk Operation Tests
// ============================================================================

#[tokio::test]
async fn test_create_many_wraps_fields_under_plural_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/organizations/create_many.json"))
        .and(body_json(
            json!({"organizations": [{"name": "Acme"}, {"name": "Globex"}]}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_status": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .create_many(vec![json!({"name": "Acme"}), json!({"name": "Globex"})])
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_update_many_puts_plural_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/organizations/update_many.json"))
        .and(body_json(json!({"organizations": [{"id": 1, "notes": "x"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_status": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .update_many(vec![json!({"id": 1, "notes": "x"})])
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_delete_many_sends_ids_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/organizations/destroy_many.json"))
        .and(query_param("ids", "1,2,3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_status": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .delete_many(&[1, 2, 3])
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_find_many_sends_ids_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/show_many.json"))
        .and(query_param("ids", "1,2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organizations": [{"id": 1}, {"id": 2}]})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client.organizations().find_many(&[1, 2]).await.unwrap();

    assert_eq!(response.body["organizations"][1]["id"], 2);
}

// ============================================================================
// Custom Verb Tests
// ============================================================================

#[tokio::test]
async fn test_autocomplete_sends_name_and_sideload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/autocomplete.json"))
        .and(query_param("name", "Acm"))
        .and(query_param("include", "users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organizations": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let mut params = HashMap::new();
    params.insert("sideload".to_string(), "users".to_string());

    let response = client
        .organizations()
        .autocomplete("Acm", &params)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_related_resolves_id_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/42/related.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organization_related": {"users_count": 3}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client.organizations().related(42).await.unwrap();

    assert_eq!(response.body["organization_related"]["users_count"], 3);
}

#[tokio::test]
async fn test_search_requires_external_id_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/search.json"))
        .and(query_param("external_id", "ext-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organizations": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .search("ext-9", &HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

// ============================================================================
// Nested Membership Tests
// ============================================================================

#[tokio::test]
async fn test_memberships_listed_under_organization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/3/organization_memberships.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"organization_memberships": []})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .organizations()
        .memberships(3)
        .list(&HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_memberships_listed_under_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/users/7/organization_memberships.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"organization_memberships": []})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let response = client
        .users()
        .organization_memberships(7)
        .list(&HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}
