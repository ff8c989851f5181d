//! Denylist scan for internal-only references.

/// URI fragments that point at internal ticketing, wiki, chat, or
/// whiteboard systems.
const INTERNAL_URI_PARTS: &[&str] = &[
    "jira",
    "confluence.eng",
    "drive.google",
    "slack.com",
    "miro.com",
];

/// True if `text` contains any denylisted substring.
///
/// Case-sensitive, no word-boundary handling. A hit escalates the label of
/// the surrounding prompt; it never blocks a step on its own.
pub fn scan_for_internal(text: &str) -> bool {
    INTERNAL_URI_PARTS.iter().any(|part| text.contains(part))
}
