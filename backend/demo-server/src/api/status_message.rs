//! Plain-text outcome of a write request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Result of a create, update or delete, sent as a plain-text body.
///
/// Only create failures carry detail; update and delete failures are
/// generic. Successes are 200, failures 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Saved,
    SaveFailed(String),
    Updated,
    UpdateFailed,
    Deleted,
    DeleteFailed,
}

impl StatusMessage {
    pub fn text(&self) -> String {
        match self {
            StatusMessage::Saved => "saved".to_string(),
            StatusMessage::SaveFailed(detail) => format!("save failed: {}", detail),
            StatusMessage::Updated => "updated".to_string(),
            StatusMessage::UpdateFailed => "update failed".to_string(),
            StatusMessage::Deleted => "deleted".to_string(),
            StatusMessage::DeleteFailed => "delete failed".to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StatusMessage::SaveFailed(_) | StatusMessage::UpdateFailed | StatusMessage::DeleteFailed
        )
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_failure() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }
}

impl IntoResponse for StatusMessage {
    fn into_response(self) -> Response {
        (self.status_code(), self.text()).into_response()
    }
}
