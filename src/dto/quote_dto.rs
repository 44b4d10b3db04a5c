use serde::{Deserialize, Serialize};

use crate::model::quote::QuoteRequest;

/// Request body of `POST /api/send-email`.
///
/// Every field defaults to empty so a missing key and an empty string are
/// rejected by the same presence check instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRequestDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "insuranceType", default)]
    pub insurance_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuoteRequestDto {
    /// Names of the required fields that are missing or empty, in the
    /// order they appear on the form.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        if self.insurance_type.is_empty() {
            missing.push("insuranceType");
        }
        missing
    }
}

impl From<QuoteRequestDto> for QuoteRequest {
    fn from(dto: QuoteRequestDto) -> Self {
        QuoteRequest {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            insurance_type: dto.insurance_type,
            message: dto.message,
        }
    }
}

/// Success body of `POST /api/send-email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
