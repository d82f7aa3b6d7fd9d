use serde::{Deserialize, Serialize};

/// Request body for create and update. A client-supplied `id` is dropped.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response body for delete, returned with 200 whether or not the row existed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            ok: true,
            message: "deleted".into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            ok: false,
            message: "not found".into(),
        }
    }
}
