use axum::{
	Json, Router,
	extract::{Query, State, rejection::QueryRejection},
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use siteview_config::Paging;
use siteview_domain::site::Caller;
use siteview_service::{Error as ServiceError, OrderDirection, Page, PageRequest, SiteView};

pub const HEADER_USER_ID: &str = "X-Siteview-User";

#[derive(Debug, Deserialize)]
pub struct SitesQuery {
	pub filter: Option<String>,
	pub limit: Option<usize>,
	pub offset: Option<usize>,
	#[serde(rename = "orderby")]
	pub order_by: Option<String>,
	pub direction: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Pagination { .. } => json_error(
				StatusCode::INTERNAL_SERVER_ERROR,
				"PAGINATION_FAILED",
				"Failed to list sites.",
				None,
			),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/apps/sites", get(list_sites))
		.with_state(state)
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_sites(
	State(state): State<AppState>,
	headers: HeaderMap,
	query: Result<Query<SitesQuery>, QueryRejection>,
) -> Result<Json<Page<SiteView>>, ApiError> {
	let caller = caller_from_headers(&headers)?;
	let Query(query) = query.map_err(|err| {
		json_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", err.body_text(), None)
	})?;
	let req = page_request(&state.service.cfg.paging, query)?;
	let service = state.service.clone();
	let page = tokio::task::spawn_blocking(move || service.paginate(&caller, &req))
		.await
		.map_err(|err| {
			tracing::error!(error = %err, "Site listing task failed.");

			json_error(
				StatusCode::INTERNAL_SERVER_ERROR,
				"INTERNAL_ERROR",
				"Site listing task failed.",
				None,
			)
		})??;

	Ok(Json(page))
}

fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, ApiError> {
	let user_id = headers
		.get(HEADER_USER_ID)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.ok_or_else(|| {
			json_error(
				StatusCode::UNAUTHORIZED,
				"UNAUTHORIZED",
				format!("{HEADER_USER_ID} header is required."),
				Some(vec![HEADER_USER_ID.to_string()]),
			)
		})?;

	Ok(Caller::new(user_id))
}

fn page_request(paging: &Paging, query: SitesQuery) -> Result<PageRequest, ApiError> {
	let limit = query.limit.unwrap_or(paging.default_limit);

	if limit == 0 || limit > paging.max_limit {
		return Err(json_error(
			StatusCode::BAD_REQUEST,
			"INVALID_REQUEST",
			format!("limit must be between 1 and {}.", paging.max_limit),
			Some(vec!["limit".to_string()]),
		));
	}

	Ok(PageRequest {
		filter: query.filter,
		limit,
		offset: query.offset.unwrap_or(0),
		order_by: query.order_by,
		direction: query.direction.as_deref().and_then(parse_direction),
		..Default::default()
	})
}

// Ordering is fixed, so an unrecognized direction is dropped rather than rejected.
fn parse_direction(raw: &str) -> Option<OrderDirection> {
	match raw.trim().to_ascii_uppercase().as_str() {
		"ASC" => Some(OrderDirection::Asc),
		"DESC" => Some(OrderDirection::Desc),
		_ => {
			tracing::debug!(direction = raw, "Ignoring unrecognized sort direction.");

			None
		},
	}
}
