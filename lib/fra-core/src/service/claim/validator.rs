use super::dto::{CreateClaimRequestDTO, UploadDocumentRequestDTO};
use crate::service::error::ValidationError;

pub(super) fn validate_create_request(
    request: &CreateClaimRequestDTO,
) -> Result<(), ValidationError> {
    if request.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title"));
    }

    if request.description.trim().is_empty() {
        return Err(ValidationError::MissingField("description"));
    }

    if let Some(area) = request
        .area_hectares
        .filter(|area| !area.is_finite() || *area < 0.0)
    {
        return Err(ValidationError::InvalidArea(area));
    }

    let location = &request.location;
    match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(ValidationError::InvalidLatitude(latitude));
            }
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(ValidationError::InvalidLongitude(longitude));
            }
        }
        (None, None) => {}
        _ => return Err(ValidationError::IncompleteCoordinates),
    }

    Ok(())
}

/// Returns the file name with any client-side directory part removed
pub(super) fn sanitize_file_name(file_name: &str) -> Result<String, ValidationError> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(ValidationError::InvalidFileName(file_name.to_owned()));
    }

    Ok(name.to_owned())
}

pub(super) fn validate_upload_request(
    request: &UploadDocumentRequestDTO,
) -> Result<String, ValidationError> {
    let file_name = sanitize_file_name(&request.file_name)?;

    if request.content.is_empty() {
        return Err(ValidationError::EmptyDocument);
    }

    Ok(file_name)
}
