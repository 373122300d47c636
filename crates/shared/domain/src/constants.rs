//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Room Types
// =============================================================================

/// Wire value for a single room
pub const ROOM_TYPE_SINGLE: &str = "single";

/// Wire value for a deluxe room
pub const ROOM_TYPE_DELUXE: &str = "deluxe";

/// Wire value for a seaside room
pub const ROOM_TYPE_SEASIDE: &str = "seaside";

// =============================================================================
// Validation
// =============================================================================

/// Accepted email shape: word/dot/hyphen local part, dotted labels, 2-4 char TLD
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$";

// =============================================================================
// Field names (wire format)
// =============================================================================

pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_BASE_PRICE: &str = "basePrice";
pub const FIELD_ROOM_TYPE: &str = "type";
pub const FIELD_NAME: &str = "name";
pub const FIELD_LOCATION: &str = "location";

// =============================================================================
// Credentials
// =============================================================================

/// Argon2id memory cost in KiB (64 MiB).
///
/// Sized with the time cost so one derivation takes a few hundred
/// milliseconds in a release build, comparable to bcrypt at cost 12.
pub const CREDENTIAL_MEMORY_COST_KIB: u32 = 65_536;

/// Argon2id iteration count
pub const CREDENTIAL_TIME_COST: u32 = 4;

/// Argon2id lanes
pub const CREDENTIAL_PARALLELISM: u32 = 1;
