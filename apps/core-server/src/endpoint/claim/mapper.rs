use fra_core::model::claim::ClaimLocation;
use fra_core::service::claim::dto::UploadDocumentResponseDTO;

use super::dto::{ClaimLocationRestDTO, UploadDocumentResponseRestDTO};

impl From<ClaimLocation> for ClaimLocationRestDTO {
    fn from(value: ClaimLocation) -> Self {
        Self {
            lat: value.latitude,
            lng: value.longitude,
            address: value.address,
            state: value.state,
            district: value.district,
            village: value.village,
        }
    }
}

impl From<ClaimLocationRestDTO> for ClaimLocation {
    fn from(value: ClaimLocationRestDTO) -> Self {
        Self {
            latitude: value.lat,
            longitude: value.lng,
            address: value.address,
            state: value.state,
            district: value.district,
            village: value.village,
        }
    }
}

impl From<UploadDocumentResponseDTO> for UploadDocumentResponseRestDTO {
    fn from(value: UploadDocumentResponseDTO) -> Self {
        Self {
            message: "Document uploaded and analyzed successfully".to_string(),
            file_path: value.file_path,
            ai_analysis: value.ai_analysis,
        }
    }
}
