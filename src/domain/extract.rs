//! Pulls the maintenance date token out of the cell text.

use regex::Regex;
use std::sync::LazyLock;

/// `Bot (DD/MM/YY)` anywhere in the cell; the capture is the bare date.
static MAINTENANCE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bot \((\d{2}/\d{2}/\d{2})\)").expect("valid regex"));

/// Returns the first `Bot (NN/NN/NN)` date token in `text`, or `None` when the
/// marker is absent. `None` means "no maintenance info", not an error.
pub fn extract(text: &str) -> Option<String> {
    MAINTENANCE_DATE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
