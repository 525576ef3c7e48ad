// SPDX-License-Identifier: Apache-2.0

//! Console status reporter for collection runs.
//!
//! Streams `[PASS]`/`[FAIL]` lines and the run summary to stderr as they
//! happen, leaving stdout to the rendered result. The `console` crate
//! drops the styling when stderr is not a terminal.

use console::style;
use easyfix_core::StatusReporter;

/// Reporter that prints styled status lines to stderr.
pub struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn general(&self, message: &str) {
        eprintln!("{}", decorate(message));
    }

    fn success(&self, message: &str) {
        eprintln!("{}", style(message).green().bold());
    }
}

/// Colors the leading `[PASS]`/`[FAIL]` tag, leaving the rest untouched.
fn decorate(message: &str) -> String {
    if let Some(rest) = message.strip_prefix("[PASS]") {
        format!("{}{rest}", style("[PASS]").green().bold())
    } else if let Some(rest) = message.strip_prefix("[FAIL]") {
        format!("{}{rest}", style("[FAIL]").red().bold())
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_keeps_pass_line_text() {
        let line = "[PASS] org/repo1 - Retrieved 3 tickets";
        let decorated = console::strip_ansi_codes(&decorate(line)).to_string();
        assert_eq!(decorated, line);
    }

    #[test]
    fn test_decorate_keeps_fail_line_text() {
        let line = "[FAIL] org/repo1 - Failed to retrieve tickets - Could not establish connection";
        let decorated = console::strip_ansi_codes(&decorate(line)).to_string();
        assert_eq!(decorated, line);
    }

    #[test]
    fn test_decorate_passes_other_lines_through() {
        assert_eq!(decorate("something else"), "something else");
    }
}
