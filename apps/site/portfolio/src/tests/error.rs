// Unit tests for error module
// Tests error serialization (used by `check --json`)

use crate::error::PortfolioError;

use common::ErrorLocation;
use portfolio_core::CoreError;
use portfolio_core::error::config::ConfigError;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized.
///
/// **WHY THIS MATTERS**: `check --json` prints failures as JSON for CI scripts. If
/// serialization breaks, the script receives nothing parseable.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[derive(Serialize)]` or a new
/// non-serializable field.
#[test]
fn given_portfolio_error_when_serialized_then_succeeds() {
    // GIVEN: A PortfolioError
    let err = PortfolioError::Portfolio {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let json = serde_json::to_string(&err).unwrap();

    // THEN: Should contain the tagged variant and message
    assert!(json.contains("\"type\":\"Portfolio\""), "JSON: {json}");
    assert!(json.contains("Test"), "JSON should contain message");
}

/// **VALUE**: Tests that core errors keep their message when converted.
///
/// **WHY THIS MATTERS**: The CLI only shows the converted error; losing the core message
/// would hide which config field is wrong.
///
/// **BUG THIS CATCHES**: Would catch a conversion that replaces the message with a generic
/// string.
#[test]
fn given_core_error_when_converted_then_message_preserved() {
    // GIVEN: A validation error from core
    let core = CoreError::from(ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("site.title cannot be empty"),
    });

    // WHEN: Converting
    let err = PortfolioError::from(core);

    // THEN: Core variant with the original reason
    match err {
        PortfolioError::Core { ref message, .. } => {
            assert!(message.contains("site.title cannot be empty"))
        }
        other => panic!("Expected Core variant, got {other:?}"),
    }
}
