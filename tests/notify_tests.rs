// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the AppleScript notification builder

use camcheck::notify;

#[test]
fn test_default_notification_script() {
    let script = notify::build_script(
        notify::DEFAULT_TITLE,
        notify::DEFAULT_MESSAGE,
        notify::DEFAULT_SOUND,
    );
    assert_eq!(
        script,
        r#"display notification "Hello, World!" with title "Call Alert" sound name "default""#
    );
}

#[test]
fn test_script_escapes_quotes() {
    let script = notify::build_script("Call \"Alert\"", "say \"hi\"", "default");
    assert_eq!(
        script,
        r#"display notification "say \"hi\"" with title "Call \"Alert\"" sound name "default""#
    );
}
