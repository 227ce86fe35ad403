// SPDX-License-Identifier: MPL-2.0

//! Desktop notifications via AppleScript
//!
//! Builds a `display notification` script and hands it to osascript. The
//! run is synchronous and fire-and-forget: the only outcome reported is the
//! interpreter's exit status.

use std::io;
use std::process::Command;
use tracing::debug;

/// Title for the call-alert notification
pub const DEFAULT_TITLE: &str = "Call Alert";
/// Body for the call-alert notification
pub const DEFAULT_MESSAGE: &str = "Hello, World!";
/// System sound played with the notification
pub const DEFAULT_SOUND: &str = "default";

const OSASCRIPT: &str = "/usr/bin/osascript";

/// Build the AppleScript `display notification` statement.
///
/// Quotes and backslashes in the interpolated strings are escaped so the
/// payload cannot break out of the script literal.
pub fn build_script(title: &str, message: &str, sound: &str) -> String {
    format!(
        r#"display notification "{}" with title "{}" sound name "{}""#,
        escape_applescript(message),
        escape_applescript(title),
        escape_applescript(sound)
    )
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Run the script through osascript and wait for it.
///
/// `Ok(true)` when the interpreter exited zero, `Ok(false)` when it exited
/// nonzero, `Err` when it could not be launched at all.
pub fn send_notification(title: &str, message: &str, sound: &str) -> io::Result<bool> {
    let script = build_script(title, message, sound);
    debug!(%script, "Running osascript");
    let status = Command::new(OSASCRIPT).args(["-e", &script]).status()?;
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_applescript(r#"a "b" c"#), r#"a \"b\" c"#);
        assert_eq!(escape_applescript(r"back\slash"), r"back\\slash");
    }
}
