use std::{env, fs, path::PathBuf};

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use siteview_api::{
	routes::{self, HEADER_USER_ID},
	state::AppState,
};
use siteview_testkit::{FakeSites, test_config};

fn app(sites: FakeSites) -> Router {
	let service = sites.build().service();

	routes::router(AppState::from_service(service))
}

fn sample_sites() -> FakeSites {
	FakeSites::new()
		.site("e", "echo")
		.site("SYSTEM_HOST", "system")
		.site("d", "delta")
		.site("c", "charlie")
		.site("b", "bravo")
		.site("a", "alpha")
		.configured("D")
		.warnings("d", "apiKey", &["Secret is missing a value."])
}

async fn get_json(app: Router, uri: &str, user: Option<&str>) -> (StatusCode, serde_json::Value) {
	let mut builder = Request::builder().uri(uri);

	if let Some(user) = user {
		builder = builder.header(HEADER_USER_ID, user);
	}

	let response = app
		.oneshot(builder.body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call the router.");
	let status = response.status();
	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse response.");

	(status, json)
}

fn ids(json: &serde_json::Value) -> Vec<&str> {
	json["items"]
		.as_array()
		.expect("Response must include items.")
		.iter()
		.map(|item| item["id"].as_str().expect("Item id must be a string."))
		.collect()
}

#[tokio::test]
async fn health_ok() {
	let request =
		Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request.");
	let response = app(sample_sites())
		.oneshot(request)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_sites_in_merged_order() {
	let (status, json) = get_json(app(sample_sites()), "/v1/apps/sites", Some("alice")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), ["SYSTEM_HOST", "d", "a", "b", "c", "e"]);
	assert_eq!(json["total_count"], 6);
	assert_eq!(json["items"][1]["configured"], true);
	assert_eq!(json["items"][1]["secrets_with_warnings"], 1);
	assert_eq!(json["items"][1]["name"], "delta");
}

#[tokio::test]
async fn applies_window_and_filter() {
	let (status, json) =
		get_json(app(sample_sites()), "/v1/apps/sites?filter=A&limit=2&offset=1", Some("alice"))
			.await;

	// "alpha", "bravo", "charlie", and "delta" contain an "a"; the reserved "system" does not.
	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), ["a", "b"]);
	assert_eq!(json["total_count"], 4);
}

#[tokio::test]
async fn ignores_ordering_parameters() {
	let (status, json) = get_json(
		app(sample_sites()),
		"/v1/apps/sites?orderby=name&direction=DESC",
		Some("alice"),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(ids(&json), ["SYSTEM_HOST", "d", "a", "b", "c", "e"]);
}

#[tokio::test]
async fn accepts_any_direction_spelling() {
	for uri in [
		"/v1/apps/sites?direction=asc&orderby=name",
		"/v1/apps/sites?direction=Desc",
		"/v1/apps/sites?direction=sideways",
	] {
		let (status, json) = get_json(app(sample_sites()), uri, Some("alice")).await;

		assert_eq!(status, StatusCode::OK, "uri: {uri}");
		assert_eq!(ids(&json), ["SYSTEM_HOST", "d", "a", "b", "c", "e"], "uri: {uri}");
	}
}

#[tokio::test]
async fn malformed_query_returns_json_error() {
	let (status, json) =
		get_json(app(sample_sites()), "/v1/apps/sites?offset=-1", Some("alice")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "INVALID_REQUEST");
	assert!(json["message"].as_str().is_some_and(|message| message.contains("offset")));
}

#[tokio::test]
async fn requires_caller_header() {
	let (status, json) = get_json(app(sample_sites()), "/v1/apps/sites", None).await;

	assert_eq!(status, StatusCode::UNAUTHORIZED);
	assert_eq!(json["error_code"], "UNAUTHORIZED");
	assert_eq!(json["fields"][0], HEADER_USER_ID);
}

#[tokio::test]
async fn rejects_blank_caller_header() {
	let (status, _) = get_json(app(sample_sites()), "/v1/apps/sites", Some("  ")).await;

	assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rejects_limit_above_max() {
	let max_limit = test_config().paging.max_limit;
	let uri = format!("/v1/apps/sites?limit={}", max_limit + 1);
	let (status, json) = get_json(app(sample_sites()), &uri, Some("alice")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "INVALID_REQUEST");
	assert_eq!(json["fields"][0], "limit");
}

#[tokio::test]
async fn rejects_zero_limit() {
	let (status, json) =
		get_json(app(sample_sites()), "/v1/apps/sites?limit=0", Some("alice")).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(json["error_code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn pagination_failure_is_opaque() {
	let sites = sample_sites().fail_catalog("Index is offline.");
	let (status, json) = get_json(app(sites), "/v1/apps/sites", Some("alice")).await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "PAGINATION_FAILED");
	assert!(
		!json["message"].as_str().unwrap_or_default().contains("offline"),
		"Unexpected message: {json}"
	);
}

#[tokio::test]
async fn state_loads_fixture_from_config() {
	let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

	fixture_path.push("../../sites.example.json");

	let mut config = test_config();

	config.storage.fixture_path = fixture_path;

	let state = AppState::new(config).expect("Failed to initialize app state.");
	let (status, json) =
		get_json(routes::router(state), "/v1/apps/sites", Some("guest")).await;

	// The intranet site is readable by "admin" only, and the archived site is never listed.
	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["total_count"], 3);
	assert_eq!(json["items"][0]["id"], "SYSTEM_HOST");
	assert_eq!(json["items"][1]["name"], "shop.example.com");
	assert_eq!(json["items"][1]["secrets_with_warnings"], 2);
}

#[tokio::test]
async fn state_reports_missing_fixture() {
	let mut config = test_config();
	let mut fixture_path = env::temp_dir();

	fixture_path.push("siteview_api_test_missing_fixture.json");

	let _ = fs::remove_file(&fixture_path);

	config.storage.fixture_path = fixture_path;

	assert!(AppState::new(config).is_err());
}
