//! Session Helpers

use uuid::Uuid;

/// Returns the provided `session_id` or creates a new UUID string when `None`.
///
/// This guarantees that every session operation works with a non-empty
/// identifier.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}
