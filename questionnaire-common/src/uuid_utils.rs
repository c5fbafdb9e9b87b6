//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse a UUID stored as TEXT in the database
pub fn parse_stored(column: &str, s: &str) -> crate::Result<Uuid> {
    Uuid::parse_str(s)
        .map_err(|e| crate::Error::Internal(format!("Malformed {} '{}': {}", column, s, e)))
}
