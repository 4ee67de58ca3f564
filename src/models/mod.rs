//! Data models representing database entities and API bodies.

use serde::Serialize;

/// Kiosk transaction model
pub mod transaction;
/// Operator account model
pub mod user;

/// Bare success acknowledgement: `{"ok": true}`.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn success() -> Self {
        Self { ok: true }
    }
}
