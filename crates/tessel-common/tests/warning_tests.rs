//! Integration tests for the warning channel.
//!
//! Kept to a single test so clearing the global set cannot race another test.

use tessel_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_clear_allows_warning_again() {
    warn_once("CSS", "invalid 'margin' declaration");
    assert!(was_warned("CSS", "invalid 'margin' declaration"));

    clear_warnings();
    assert!(!was_warned("CSS", "invalid 'margin' declaration"));

    warn_once("CSS", "invalid 'margin' declaration");
    assert!(was_warned("CSS", "invalid 'margin' declaration"));
}
