//! Diagnostic message describing a scenario's current stage context.

use serde::Serialize;
use std::fmt;

/// Textual context for a scenario: its name plus the latest description
/// set for each of the given/when/then stages.
///
/// An empty field means the stage has not been described yet. The `Display`
/// impl renders the hierarchical layout used in failure diagnostics:
///
/// ```text
/// TEST <scenario>
///   GIVEN <given>
///     WHEN <when>
///       THEN <then>
/// ```
///
/// Indentation is two spaces per level, and the level deepens only after a
/// non-empty stage has been printed — a stage that was never described is
/// omitted and does not consume an indent level.
///
/// # Examples
///
/// ```
/// use gwt_core::Message;
///
/// let mut message = Message::new("sums");
/// message.given = "two numbers".to_string();
/// message.then = "they add up".to_string();
///
/// assert_eq!(
///     message.to_string(),
///     "TEST sums\n  GIVEN two numbers\n  THEN they add up"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Name of the scenario this message belongs to.
    pub scenario: String,
    /// Latest GIVEN description, or empty if none was declared.
    pub given: String,
    /// Latest WHEN description, or empty if none was declared.
    pub when: String,
    /// Latest THEN description, or empty if none was declared.
    pub then: String,
}

impl Message {
    /// Creates a message for a named scenario with no stages described.
    pub fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            given: String::new(),
            when: String::new(),
            then: String::new(),
        }
    }
}

const INDENT: &str = "  ";

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TEST {}", self.scenario)?;

        let stages = [
            (&self.given, "GIVEN"),
            (&self.when, "WHEN"),
            (&self.then, "THEN"),
        ];

        let mut depth = 1;
        for (text, title) in stages {
            if !text.is_empty() {
                write!(f, "\n{}{} {}", INDENT.repeat(depth), title, text)?;
                depth += 1;
            }
        }

        Ok(())
    }
}
