pub mod forms;
pub mod pages;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    feed::FeedClient,
    listings::{
        catalog,
        classify::{classify, Category, CategoryFilter},
    },
    models::{
        listing::Listing,
        mortgage::{AmortizationRow, MortgageCalculation},
    },
    mortgage::{
        calculations, pdf,
        submission_client::{is_valid_email, SubmissionClient},
    },
};

use forms::{MortgageForm, MortgageRequest};
use pages::{HomeView, MortgageOutcome};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: FeedClient,
    pub submissions: SubmissionClient,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> AppState {
        let feed = FeedClient::new(&config);
        let submissions = SubmissionClient::new(&config);
        AppState {
            config,
            feed,
            submissions,
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub struct TypeQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Serialize)]
pub struct ClassifiedListing<'a> {
    pub category: Category,
    #[serde(flatten)]
    pub listing: &'a Listing,
}

#[derive(Serialize)]
pub struct ListingsResponse<'a> {
    pub listings: Vec<ClassifiedListing<'a>>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub rows: Vec<AmortizationRow>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/properties", get(properties))
        .route("/listing", get(listing_detail))
        .route("/mortgage", get(mortgage_form).post(mortgage_calculate))
        .route("/mortgage/pdf", post(mortgage_pdf))
        .route("/mortgage/email", post(mortgage_email))
        .route("/api/listings", get(api_listings))
        .route("/api/listings/:id", get(api_listing))
        .route("/api/mortgage", post(api_mortgage))
        .route("/api/mortgage/schedule", get(api_mortgage_schedule))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> Result<()> {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind http listener on {}", bind_addr))?;
    let app = router(state);

    info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .context("HTTP server crashed")
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
}

async fn home(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let listings = match state.feed.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => {
            error!("Home page failed to load listings: {:?}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Html(pages::home_error_page().into_string()),
            );
        }
    };

    let split = catalog::split_by_category(&listings);
    let view = HomeView {
        split: &split,
        preview_limit: state.config.preview_card_limit,
        featured: catalog::featured(&listings),
        placeholder: &state.config.placeholder_image,
    };

    (StatusCode::OK, Html(pages::home_page(&view).into_string()))
}

async fn properties(
    State(state): State<AppState>,
    Query(TypeQuery { kind }): Query<TypeQuery>,
) -> (StatusCode, Html<String>) {
    let filter = CategoryFilter::from_param(kind.as_deref());

    match state.feed.fetch_listings().await {
        Ok(listings) => {
            let filtered = catalog::filter_by_category(&listings, filter);
            let page = pages::properties_page(filter, &filtered, &state.config.placeholder_image);
            (StatusCode::OK, Html(page.into_string()))
        }
        Err(e) => {
            error!("Properties page failed to load listings: {:?}", e);
            let page = pages::properties_error_page(filter, &e.to_string());
            (StatusCode::BAD_GATEWAY, Html(page.into_string()))
        }
    }
}

async fn listing_detail(
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery>,
) -> (StatusCode, Html<String>) {
    let id = match id.filter(|id| catalog::is_valid_id(id)) {
        Some(id) => id,
        None => {
            let page = pages::listing_error_page(
                "No valid listing ID provided. Go back and click a listing again.",
            );
            return (StatusCode::BAD_REQUEST, Html(page.into_string()));
        }
    };

    let listings = match state.feed.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => {
            error!("Error loading listing {}: {:?}", id, e);
            let page = pages::listing_error_page("Failed to load listing details.");
            return (StatusCode::BAD_GATEWAY, Html(page.into_string()));
        }
    };

    match catalog::find_by_id(&listings, &id) {
        Some(listing) => (
            StatusCode::OK,
            Html(pages::listing_page(listing).into_string()),
        ),
        None => {
            error!("Listing not found for id={}", id);
            let page = pages::listing_error_page("Failed to load listing details.");
            (StatusCode::NOT_FOUND, Html(page.into_string()))
        }
    }
}

async fn mortgage_form() -> Html<String> {
    let form = MortgageForm {
        frequency: "12".to_string(),
        ..Default::default()
    };
    Html(pages::mortgage_page(&form, &MortgageOutcome::Empty, None).into_string())
}

fn calculate(state: &AppState, form: &MortgageForm) -> Result<MortgageCalculation, String> {
    form.to_parameters()
        .and_then(|params| calculations::compute_payment(&params, state.config.rate_convention))
        .map_err(|e| e.to_string())
}

async fn mortgage_calculate(
    State(state): State<AppState>,
    Form(form): Form<MortgageForm>,
) -> (StatusCode, Html<String>) {
    let (status, outcome) = match calculate(&state, &form) {
        Ok(calculation) => (StatusCode::OK, MortgageOutcome::Calculated(calculation)),
        Err(message) => (StatusCode::BAD_REQUEST, MortgageOutcome::Invalid(message)),
    };
    (
        status,
        Html(pages::mortgage_page(&form, &outcome, None).into_string()),
    )
}

async fn mortgage_pdf(State(state): State<AppState>, Form(form): Form<MortgageForm>) -> Response {
    match calculate(&state, &form) {
        Ok(calculation) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", pdf::PDF_FILE_NAME),
                ),
            ],
            pdf::render_pdf(&calculation),
        )
            .into_response(),
        Err(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

async fn mortgage_email(
    State(state): State<AppState>,
    Form(form): Form<MortgageForm>,
) -> (StatusCode, Html<String>) {
    let calculation = match calculate(&state, &form) {
        Ok(calculation) => calculation,
        Err(message) => {
            let page = pages::mortgage_page(&form, &MortgageOutcome::Invalid(message), None);
            return (StatusCode::BAD_REQUEST, Html(page.into_string()));
        }
    };

    if !is_valid_email(&form.client_email) {
        let page = pages::mortgage_page(
            &form,
            &MortgageOutcome::Invalid("Please enter a valid email address.".to_string()),
            None,
        );
        return (StatusCode::BAD_REQUEST, Html(page.into_string()));
    }

    let (status, notice) =
        match state.submissions.submit(&form.client_email, &calculation).await {
            Ok(()) => (StatusCode::OK, "Results sent and saved successfully."),
            Err(e) => {
                error!("Failed to submit mortgage results: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Error sending email. Please try again.",
                )
            }
        };

    let page = pages::mortgage_page(
        &form,
        &MortgageOutcome::Calculated(calculation),
        Some(notice),
    );
    (status, Html(page.into_string()))
}

async fn api_listings(
    State(state): State<AppState>,
    Query(TypeQuery { kind }): Query<TypeQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let filter = CategoryFilter::from_param(kind.as_deref());
    let listings = state.feed.fetch_listings().await.map_err(|e| {
        error!("Failed to load listings: {:?}", e);
        StatusCode::BAD_GATEWAY
    })?;

    let response = ApiResponse {
        data: ListingsResponse {
            listings: catalog::filter_by_category(&listings, filter)
                .into_iter()
                .map(|listing| ClassifiedListing {
                    category: classify(listing),
                    listing,
                })
                .collect(),
        },
    };

    serde_json::to_value(response)
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn api_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let listings = state.feed.fetch_listings().await.map_err(|e| {
        error!("Failed to load listings: {:?}", e);
        StatusCode::BAD_GATEWAY
    })?;

    let listing = catalog::find_by_id(&listings, &id).ok_or(StatusCode::NOT_FOUND)?;
    let response = ApiResponse {
        data: ClassifiedListing {
            category: classify(listing),
            listing,
        },
    };

    serde_json::to_value(response)
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn api_mortgage(
    State(state): State<AppState>,
    Json(request): Json<MortgageRequest>,
) -> Result<Json<ApiResponse<MortgageCalculation>>, (StatusCode, String)> {
    calculations::compute_payment(&request.into(), state.config.rate_convention)
        .map(|calculation| Json(ApiResponse { data: calculation }))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

async fn api_mortgage_schedule(
    State(state): State<AppState>,
    Query(request): Query<MortgageRequest>,
) -> Result<Json<ApiResponse<ScheduleResponse>>, (StatusCode, String)> {
    calculations::amortization_schedule(&request.into(), state.config.rate_convention)
        .map(|rows| {
            Json(ApiResponse {
                data: ScheduleResponse { rows },
            })
        })
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}
