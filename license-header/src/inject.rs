//! Marker detection and header injection.
//!
//! All operations here are pure, total string functions: detection scans a
//! bounded number of lines for [`ATTRIBUTION_MARKER`], injection prepends the
//! family's template when the marker is absent and is a no-op otherwise.

use std::borrow::Cow;
use std::path::Path;

use crate::family::{SyntaxFamily, classify};
use crate::template::{ATTRIBUTION_MARKER, header_for};

/// Default number of lines scanned for an existing attribution marker.
///
/// License headers live at the top of files by construction, so the scan is
/// bounded rather than whole-file — the bound caps cost on large inputs and
/// is part of the detection contract, not an optimization.
pub const DEFAULT_SCAN_LINES: usize = 100;

/// Check whether `text` already carries the attribution marker, scanning at
/// most [`DEFAULT_SCAN_LINES`] + 1 lines from the start.
#[must_use]
pub fn has_marker(text: &str) -> bool {
    has_marker_within(text, DEFAULT_SCAN_LINES)
}

/// Check whether `text` carries the attribution marker within the first
/// `max_lines` + 1 lines (split on `\n`, line indices `0..=max_lines`).
///
/// Returns `true` on the first line containing the marker as a substring;
/// `false` once the bound is reached or the text is exhausted.
#[must_use]
pub fn has_marker_within(text: &str, max_lines: usize) -> bool {
    text.split('\n')
        .take(max_lines.saturating_add(1))
        .any(|line| line.contains(ATTRIBUTION_MARKER))
}

/// Prepend the family's header to `text` unless the marker is already present.
///
/// Uses the default scan bound; see [`inject_within`] for a caller-tuned bound.
#[must_use]
pub fn inject(text: &str, family: SyntaxFamily) -> Cow<'_, str> {
    inject_within(text, family, DEFAULT_SCAN_LINES)
}

/// Prepend the family's header to `text` unless the marker is found within
/// the first `max_lines` + 1 lines.
///
/// When the marker is absent the result is exactly
/// `template + "\n\n" + text` — the original content is untouched as a
/// suffix (line endings, byte-order marks, and shebang bytes included).
/// When the marker is present the input is returned borrowed, unchanged.
#[must_use]
pub fn inject_within(text: &str, family: SyntaxFamily, max_lines: usize) -> Cow<'_, str> {
    if has_marker_within(text, max_lines) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}\n\n{}", header_for(family), text))
    }
}

/// Composed per-file transform: classify `path`, then conditionally inject.
///
/// Unknown extensions return the input borrowed, unchanged.
#[must_use]
pub fn transform<'a>(path: &Path, text: &'a str) -> Cow<'a, str> {
    match classify(path) {
        Some(family) => inject(text, family),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{SCRIPT_HEADER, STYLE_SHEET_HEADER};

    const FAMILIES: [SyntaxFamily; 3] = [
        SyntaxFamily::StyleSheet,
        SyntaxFamily::Markup,
        SyntaxFamily::Script,
    ];

    #[test]
    fn test_every_template_is_self_detecting() {
        for family in FAMILIES {
            assert!(
                has_marker(header_for(family)),
                "{family} header not detected by has_marker"
            );
        }
    }

    #[test]
    fn test_inject_prefix_contract() {
        let body = "body { color: red; }";
        assert!(!has_marker(body));
        let injected = inject(body, SyntaxFamily::StyleSheet);
        assert_eq!(injected, format!("{STYLE_SHEET_HEADER}\n\n{body}"));
        assert!(injected.ends_with(body), "original content must be a suffix");
    }

    #[test]
    fn test_inject_is_idempotent() {
        for family in FAMILIES {
            let once = inject("const x = 1;\n", family).into_owned();
            let twice = inject(&once, family);
            assert_eq!(twice, once, "{family} injection is not idempotent");
        }
    }

    #[test]
    fn test_inject_is_noop_when_marker_present() {
        let text = format!("// {ATTRIBUTION_MARKER}\nlet a = 0;\n");
        for family in FAMILIES {
            let result = inject(&text, family);
            assert!(matches!(result, Cow::Borrowed(_)));
            assert_eq!(result, text);
        }
    }

    #[test]
    fn test_inject_preserves_crlf_and_shebang() {
        let body = "#!/usr/bin/env node\r\nconsole.log('hi');\r\n";
        let injected = inject(body, SyntaxFamily::Script);
        assert_eq!(injected, format!("{SCRIPT_HEADER}\n\n{body}"));
    }

    #[test]
    fn test_inject_on_empty_text() {
        let injected = inject("", SyntaxFamily::Markup);
        assert_eq!(injected, format!("{}\n\n", header_for(SyntaxFamily::Markup)));
    }

    #[test]
    fn test_has_marker_scan_bound_respected() {
        // Marker only appears after line 150 (0-indexed): invisible at bound
        // 100, visible at bound 200.
        let mut text = "\n".repeat(150);
        text.push_str(ATTRIBUTION_MARKER);
        text.push('\n');
        assert!(!has_marker_within(&text, 100));
        assert!(has_marker_within(&text, 200));
        // The default bound is 100 lines.
        assert_eq!(DEFAULT_SCAN_LINES, 100);
        assert!(!has_marker(&text));
    }

    #[test]
    fn test_has_marker_bound_is_inclusive() {
        // Marker on line index exactly `max_lines` is still scanned.
        let mut text = "\n".repeat(100);
        text.push_str(ATTRIBUTION_MARKER);
        assert!(has_marker_within(&text, 100));
        assert!(!has_marker_within(&text, 99));
    }

    #[test]
    fn test_transform_end_to_end() {
        let path = Path::new("style.css");
        let body = "body { color: red; }";
        let first = transform(path, body).into_owned();
        assert_eq!(first, format!("{STYLE_SHEET_HEADER}\n\n{body}"));
        // Second pass over the output is stable.
        let second = transform(path, &first);
        assert_eq!(second, first);
    }

    #[test]
    fn test_transform_skips_unknown_family() {
        let body = "plain text, no header wanted";
        let result = transform(Path::new("notes.txt"), body);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, body);
    }
}
