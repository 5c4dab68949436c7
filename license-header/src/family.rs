//! Syntax-family classification.
//!
//! Classification is purely lexical: the path's extension decides the
//! comment syntax, nothing is read from disk. Unsupported extensions
//! classify to `None`, which the pipeline treats as "do not transform".

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Comment-syntax family of a source file, derived from its path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxFamily {
    /// `.css` / `.scss` — `/* ... */` block comments.
    StyleSheet,
    /// `.html` — `<!-- ... -->` comments.
    Markup,
    /// `.js` — `/** @license ... */` doc-block comments.
    Script,
}

impl SyntaxFamily {
    /// Lowercase name used in reports and log lines.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StyleSheet => "stylesheet",
            Self::Markup => "markup",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for SyntaxFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the syntax family from a file extension.
///
/// Returns `None` for unsupported extensions — a valid terminal result,
/// not an error. Matching is case-sensitive.
#[must_use]
pub fn classify(path: &Path) -> Option<SyntaxFamily> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css" | "scss") => Some(SyntaxFamily::StyleSheet),
        Some("html") => Some(SyntaxFamily::Markup),
        Some("js") => Some(SyntaxFamily::Script),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_coverage() {
        assert_eq!(classify(Path::new("a.css")), Some(SyntaxFamily::StyleSheet));
        assert_eq!(classify(Path::new("a.scss")), Some(SyntaxFamily::StyleSheet));
        assert_eq!(classify(Path::new("a.html")), Some(SyntaxFamily::Markup));
        assert_eq!(classify(Path::new("a.js")), Some(SyntaxFamily::Script));
        assert_eq!(classify(Path::new("a.txt")), None);
    }

    #[test]
    fn test_classification_uses_full_extension() {
        // "min.js" ends with .js; the extension is still "js".
        assert_eq!(
            classify(Path::new("dist/app.min.js")),
            Some(SyntaxFamily::Script)
        );
        // .json must not classify as .js
        assert_eq!(classify(Path::new("package.json")), None);
        assert_eq!(classify(Path::new("README")), None);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(classify(Path::new("SHOUTING.CSS")), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SyntaxFamily::StyleSheet.to_string(), "stylesheet");
        assert_eq!(SyntaxFamily::Markup.to_string(), "markup");
        assert_eq!(SyntaxFamily::Script.to_string(), "script");
    }
}
