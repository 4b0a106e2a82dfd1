//! Global subscriber installation
//!
//! Runs in its own test binary so the global subscriber starts unset.

use erlang_core::{init, setup_logging, ErlangC, ErrorCategory, LoggingConfig};
use tracing::Level;

#[test]
fn test_subscriber_is_installed_once() {
    let json = LoggingConfig::new(Level::DEBUG).with_json().with_file_info();
    assert!(setup_logging(json).is_ok());

    // a second subscriber is refused
    let err = setup_logging(LoggingConfig::default()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(setup_logging(LoggingConfig::search_tracing()).is_err());

    // init keeps the installed subscriber
    assert!(init().is_ok());

    // searches emit through the installed subscriber
    let engine = ErlangC::new();
    assert_eq!(engine.servers_waitprob(5.0, 0.1).unwrap(), 9);
}
