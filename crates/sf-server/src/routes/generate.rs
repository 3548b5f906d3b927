//! POST /generate endpoint
//!
//! The single code-generation endpoint: normalize the inbound project
//! description, build the prompt payload, call the completion API, validate
//! the model output, and relay the generated file mapping.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sf_prompt::{build_payload, normalize, ProjectRequest};
use sf_provider::{extract_artifacts, GeneratedArtifacts};
use sf_types::AppError;
use tracing::{error, info};

use crate::middleware::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// POST /generate
/// Generate Arduino project files from a project description
#[utoipa::path(
    post,
    path = "/generate",
    tag = "generate",
    responses(
        (status = 200, description = "Mapping of generated file name to file content", content_type = "application/json"),
        (status = 400, description = "Malformed request or unusable model output", body = crate::types::ErrorResponse),
        (status = 500, description = "Missing configuration or unexpected failure", body = crate::types::ErrorResponse),
        (status = 503, description = "Completion API unreachable or rejected the request", body = crate::types::ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> ApiResult<Json<GeneratedArtifacts>> {
    // Guard clause: without a configured key there is nothing to call.
    // Checked before touching the body so no network request is attempted.
    let Some(client) = state.client() else {
        error!("Rejecting /generate: {} is not configured", sf_config::API_KEY_VAR);
        return Err(ApiErrorResponse::internal_error(format!(
            "{} not configured. Please set the environment variable.",
            sf_config::API_KEY_VAR
        )));
    };

    let Json(request) = payload
        .map_err(|rejection| fail(&state, AppError::InvalidRequest(rejection.body_text())))?;

    let normalized = normalize(request);
    info!(project = %normalized.project_name, "Processed input");

    let chat_payload =
        build_payload(&normalized, &state.config.model).map_err(|e| fail(&state, e))?;

    info!(
        "Making API request for project: {}",
        normalized.project_name
    );
    let body = client
        .complete(&chat_payload)
        .await
        .map_err(|e| fail(&state, e))?;

    let files = extract_artifacts(&body).map_err(|e| fail(&state, e))?;

    info!(
        "Successfully generated code for project: {}",
        normalized.project_name
    );
    Ok(Json(files))
}

/// Log the failure with its category and convert it for the wire.
fn fail(state: &AppState, err: AppError) -> ApiErrorResponse {
    error!("{}", err);
    ApiErrorResponse::from_app_error(err, state.config.debug)
}
