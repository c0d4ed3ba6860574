//! Domain-level constants.
//!
//! These constants define business rules and the messages reported when
//! they are violated.

// =============================================================================
// Entity names
// =============================================================================

/// Entity name used in user not-found messages
pub const ENTITY_USER: &str = "User";

/// Field name used in email conflict messages
pub const FIELD_EMAIL: &str = "Email";

// =============================================================================
// Validation
// =============================================================================

/// Reported when a required request body is missing or unreadable
pub const MSG_MISSING_BODY: &str = "Request body is missing";

/// Reported when a path id is not a valid integer
pub const MSG_INVALID_ID: &str = "Invalid id";

/// Reported when the name is absent or blank
pub const MSG_BLANK_NAME: &str = "Name must not be blank";

/// Reported when the email is absent or blank
pub const MSG_BLANK_EMAIL: &str = "Email must not be blank";

/// Reported when the password is absent or blank
pub const MSG_BLANK_PASSWORD: &str = "Password must not be blank";

// =============================================================================
// Responses
// =============================================================================

/// Confirmation returned after a user is deleted
pub const MSG_USER_DELETED: &str = "User deleted successfully";
