// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod catalog;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use citywise_api::{
    ApiError, CreateParcelRequest, CreateParcelResponse, CreateProjectRequest,
    CreateProjectResponse, CreateShapeRequest, CreateTaskRequest, DeleteShapeResponse,
    EvaluateRequirementsResponse, ListShapesResponse, ListTasksResponse, ParcelInfo,
    PreviewRequirementsRequest, PreviewRequirementsResponse, ProjectInfo,
    PurgeCorruptedShapesResponse, RoadmapInfo, RoadmapTemplateResponse, SetSetbacksRequest,
    SetSetbacksResponse, ShapeInfo, TaskInfo,
};
use citywise_domain::RuleCatalog;
use citywise_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::catalog::{CatalogError, CatalogSource};

/// CityWise Server - HTTP server for the CityWise zoning engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "CITYWISE_DATABASE")]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, env = "CITYWISE_PORT", default_value_t = 3000)]
    port: u16,

    /// Path to a JSON requirement rule catalog. If not provided, uses the built-in catalog.
    #[arg(short, long, env = "CITYWISE_RULES")]
    rules: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex; the rule catalog is read-only
/// once loaded and needs no lock.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
    /// The requirement rule catalog, loaded on first use.
    catalog: Arc<CatalogSource>,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        error!(error = %err, "Rule catalog unavailable");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Rule catalog unavailable: {err}"),
        }
    }
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/projects`.
async fn handle_create_project(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<CreateProjectResponse>, HttpError> {
    info!(
        jurisdiction = %req.jurisdiction,
        project_type = %req.project_type,
        "Handling create_project request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateProjectResponse = citywise_api::create_project(&mut persistence, req)?;

    info!(project_id = response.project_id, "Created project");
    Ok(Json(response))
}

/// Handler for GET `/projects/{project_id}`.
async fn handle_get_project(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::get_project(&mut persistence, project_id)?))
}

/// Handler for POST `/projects/{project_id}/parcels`.
async fn handle_create_parcel(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
    Json(req): Json<CreateParcelRequest>,
) -> Result<Json<CreateParcelResponse>, HttpError> {
    info!(project_id, apn = %req.apn, "Handling create_parcel request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::create_parcel(
        &mut persistence,
        project_id,
        &req,
    )?))
}

/// Handler for GET `/parcels/{parcel_id}`.
async fn handle_get_parcel(
    AxumState(app_state): AxumState<AppState>,
    Path(parcel_id): Path<i64>,
) -> Result<Json<ParcelInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::get_parcel(&mut persistence, parcel_id)?))
}

/// Handler for PUT `/parcels/{parcel_id}/setbacks`.
async fn handle_set_setbacks(
    AxumState(app_state): AxumState<AppState>,
    Path(parcel_id): Path<i64>,
    Json(req): Json<SetSetbacksRequest>,
) -> Result<Json<SetSetbacksResponse>, HttpError> {
    info!(parcel_id, "Handling set_setbacks request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::set_parcel_setbacks(
        &mut persistence,
        parcel_id,
        req,
    )?))
}

/// Handler for POST `/projects/{project_id}/shapes`.
async fn handle_create_shape(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
    Json(req): Json<CreateShapeRequest>,
) -> Result<Json<ShapeInfo>, HttpError> {
    info!(project_id, shape_type = %req.shape_type, "Handling create_shape request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::create_shape(
        &mut persistence,
        project_id,
        req,
    )?))
}

/// Handler for GET `/projects/{project_id}/shapes`.
async fn handle_list_shapes(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ListShapesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::list_shapes(&mut persistence, project_id)?))
}

/// Handler for DELETE `/shapes/{shape_id}`.
async fn handle_delete_shape(
    AxumState(app_state): AxumState<AppState>,
    Path(shape_id): Path<i64>,
) -> Result<Json<DeleteShapeResponse>, HttpError> {
    info!(shape_id, "Handling delete_shape request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::delete_shape(&mut persistence, shape_id)?))
}

/// Handler for POST `/maintenance/purge-corrupted-shapes`.
async fn handle_purge_corrupted_shapes(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<PurgeCorruptedShapesResponse>, HttpError> {
    info!("Handling purge_corrupted_shapes request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::purge_corrupted_shapes(&mut persistence)?))
}

/// Handler for GET `/roadmap-templates/{project_type}`.
async fn handle_roadmap_template(
    Path(project_type): Path<String>,
) -> Json<RoadmapTemplateResponse> {
    Json(citywise_api::preview_roadmap_template(&project_type))
}

/// Handler for POST `/projects/{project_id}/roadmap`.
async fn handle_create_roadmap(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<RoadmapInfo>, HttpError> {
    info!(project_id, "Handling create_roadmap request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::create_roadmap(&mut persistence, project_id)?))
}

/// Handler for GET `/projects/{project_id}/roadmap`.
async fn handle_get_roadmap(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<RoadmapInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::get_roadmap(&mut persistence, project_id)?))
}

/// Handler for POST `/requirements/preview`.
async fn handle_preview_requirements(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PreviewRequirementsRequest>,
) -> Result<Json<PreviewRequirementsResponse>, HttpError> {
    let catalog: &RuleCatalog = app_state.catalog.get().await?;
    Ok(Json(citywise_api::preview_requirements(catalog, &req)))
}

/// Handler for POST `/projects/{project_id}/requirements`.
///
/// Resolves the project's requirements and creates one task per new
/// discipline.
async fn handle_evaluate_requirements(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<EvaluateRequirementsResponse>, HttpError> {
    info!(project_id, "Handling evaluate_requirements request");

    let catalog: &RuleCatalog = app_state.catalog.get().await?;
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::evaluate_requirements(
        &mut persistence,
        catalog,
        project_id,
    )?))
}

/// Handler for POST `/projects/{project_id}/tasks`.
async fn handle_create_task(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<TaskInfo>, HttpError> {
    info!(project_id, "Handling create_task request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::create_task(
        &mut persistence,
        project_id,
        &req,
    )?))
}

/// Handler for GET `/projects/{project_id}/tasks`.
async fn handle_list_tasks(
    AxumState(app_state): AxumState<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ListTasksResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(citywise_api::list_tasks(&mut persistence, project_id)?))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/projects", post(handle_create_project))
        .route("/projects/{project_id}", get(handle_get_project))
        .route("/projects/{project_id}/parcels", post(handle_create_parcel))
        .route("/parcels/{parcel_id}", get(handle_get_parcel))
        .route("/parcels/{parcel_id}/setbacks", put(handle_set_setbacks))
        .route(
            "/projects/{project_id}/shapes",
            post(handle_create_shape).get(handle_list_shapes),
        )
        .route("/shapes/{shape_id}", delete(handle_delete_shape))
        .route(
            "/maintenance/purge-corrupted-shapes",
            post(handle_purge_corrupted_shapes),
        )
        .route(
            "/roadmap-templates/{project_type}",
            get(handle_roadmap_template),
        )
        .route(
            "/projects/{project_id}/roadmap",
            post(handle_create_roadmap).get(handle_get_roadmap),
        )
        .route("/requirements/preview", post(handle_preview_requirements))
        .route(
            "/projects/{project_id}/requirements",
            post(handle_evaluate_requirements),
        )
        .route(
            "/projects/{project_id}/tasks",
            post(handle_create_task).get(handle_list_tasks),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing CityWise Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let catalog: Arc<CatalogSource> = Arc::new(CatalogSource::new(args.rules));
    // Surface a bad catalog path at startup rather than on the first request
    catalog.get().await?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        catalog,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
