use std::path::Path as FsPath;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::Uid;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::form::{FormError, FormFields, FormKind, SubmissionForm};
use crate::models::submission::SubmissionResponse;
use crate::state::AppState;
use crate::task::upload::{MultipartUpload, Upload, read_upload};
use crate::task::{
    check_for_errors, convert_analysis_task, create_analysis_task, create_re_analyze_task,
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Firmware",
    operation_id = "uploadFirmware",
    summary = "Upload a firmware image for analysis",
    description = "Accepts the firmware metadata form and the image in the `file` field. \
        Empty `device_class`, `vendor`, `device_name` and `device_part` values fall back to \
        the matching `<field>_dropdown` field unless it is `new entry`. An empty \
        `release_date` becomes `1970-01-01`. `analysis_systems` may be repeated.",
    request_body(content_type = "multipart/form-data", description = "Firmware metadata and image"),
    responses(
        (status = 201, description = "Analysis scheduled", body = SubmissionResponse),
        (status = 400, description = "Missing form field (VALIDATION_ERROR) or incomplete task (INVALID_TASK)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_firmware(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload_config = &state.config.upload;
    let tmp_root = upload_config.tmp_root();
    let (fields, upload) = read_submission(
        multipart,
        Some((tmp_root.as_path(), upload_config.max_file_size)),
    )
    .await?;

    let form = SubmissionForm::parse(&fields, FormKind::Upload)?;
    let task = create_analysis_task(form, upload);

    let errors = check_for_errors(&task);
    if !errors.is_empty() {
        return Err(AppError::InvalidTask(errors));
    }

    let (fo, fw) = convert_analysis_task(task)?;
    let response = SubmissionResponse::new(&fo, &fw);
    state.backend.add_analysis_task(fo, fw).await?;

    info!(uid = %response.uid, "Firmware upload accepted");
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/re-analyze/{uid}",
    tag = "Firmware",
    operation_id = "reAnalyzeFirmware",
    summary = "Schedule new analyses for a stored firmware",
    description = "Accepts the same metadata form as the upload without a file. The stored \
        image is reused and its metadata replaced. `release_date` may be omitted.",
    params(("uid" = String, Path, description = "Firmware identifier")),
    request_body(content_type = "multipart/form-data", description = "Firmware metadata"),
    responses(
        (status = 200, description = "Re-analysis scheduled", body = SubmissionResponse),
        (status = 400, description = "Missing form field (VALIDATION_ERROR) or incomplete task (INVALID_TASK)", body = ErrorBody),
        (status = 404, description = "Firmware not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn re_analyze_firmware(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    multipart: Multipart,
) -> Result<Json<SubmissionResponse>, AppError> {
    let uid = Uid::new(uid);
    if !state.backend.exists(&uid).await? {
        return Err(AppError::NotFound(format!("Firmware '{uid}' not found")));
    }

    let (fields, _) = read_submission(multipart, None).await?;

    let form = SubmissionForm::parse(&fields, FormKind::Reanalysis)?;
    let task = create_re_analyze_task(form, uid);

    let errors = check_for_errors(&task);
    if !errors.is_empty() {
        return Err(AppError::InvalidTask(errors));
    }

    let (fo, fw) = convert_analysis_task(task)?;
    let response = SubmissionResponse::new(&fo, &fw);
    state.backend.add_re_analyze_task(fo, fw).await?;

    info!(uid = %response.uid, "Re-analysis accepted");
    Ok(Json(response))
}

/// Collect the text fields of a submission.
///
/// With `file_limits` set, the `file` part is read through a temporary
/// directory below the given root; otherwise it is skipped. A `file` part
/// with an empty file name is what browsers send when no file was chosen
/// and counts as no upload.
async fn read_submission(
    mut multipart: Multipart,
    file_limits: Option<(&FsPath, u64)>,
) -> Result<(FormFields, Option<Upload>), AppError> {
    let mut fields = FormFields::new();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                if field.file_name() == Some("") {
                    continue;
                }
                if let Some((tmp_root, max_size)) = file_limits {
                    let source = MultipartUpload::new(field, max_size);
                    upload = Some(read_upload(source, tmp_root).await);
                }
            }
            Some(name) => {
                let name = name.to_string();
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read '{name}': {e}")))?;
                fields.insert(name, value);
            }
            None => {} // Ignore unnamed parts.
        }
    }

    Ok((fields, upload))
}
