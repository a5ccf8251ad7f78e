use axum::Json;
use axum::extract::{Path, State};
use common::Uid;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::submission::FirmwareResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/firmware/{uid}",
    tag = "Firmware",
    operation_id = "getFirmware",
    summary = "Get a stored firmware",
    params(("uid" = String, Path, description = "Firmware identifier")),
    responses(
        (status = 200, description = "Firmware metadata", body = FirmwareResponse),
        (status = 404, description = "Firmware not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_firmware(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<FirmwareResponse>, AppError> {
    let uid = Uid::new(uid);
    let firmware = state
        .backend
        .get_firmware(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Firmware '{uid}' not found")))?;
    let scheduled_analysis = state.backend.scheduled_analysis(&uid).await?;

    Ok(Json(FirmwareResponse {
        firmware,
        scheduled_analysis,
    }))
}
