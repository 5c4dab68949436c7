//! Header templates and the attribution marker.
//!
//! All three templates embed [`ATTRIBUTION_MARKER`] verbatim. That single
//! literal is what [`has_marker`](crate::has_marker) searches for, so any
//! injected header is self-detecting and repeated runs never stack headers.

use crate::family::SyntaxFamily;

/// The attribution line shared by every header template.
///
/// Detection and injection must use this same literal — this is the
/// idempotence anchor for the whole crate.
pub const ATTRIBUTION_MARKER: &str = "Copyright (c) 2018, General Electric";

/// Header for style-sheet files (`.css`, `.scss`): a `/* ... */` block.
pub const STYLE_SHEET_HEADER: &str = r#"/*
 * Copyright (c) 2018, General Electric
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */"#;

/// Header for markup files (`.html`): a `<!-- ... -->` comment.
pub const MARKUP_HEADER: &str = r#"<!--
Copyright (c) 2018, General Electric

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
-->"#;

/// Header for script files (`.js`): a `/** @license ... */` doc block.
///
/// The `@license` tag tells minifiers to preserve the comment.
pub const SCRIPT_HEADER: &str = r#"/**
 * @license
 * Copyright (c) 2018, General Electric
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */"#;

/// Select the header template for a syntax family.
#[must_use]
pub fn header_for(family: SyntaxFamily) -> &'static str {
    match family {
        SyntaxFamily::StyleSheet => STYLE_SHEET_HEADER,
        SyntaxFamily::Markup => MARKUP_HEADER,
        SyntaxFamily::Script => SCRIPT_HEADER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_embeds_the_marker() {
        for header in [STYLE_SHEET_HEADER, MARKUP_HEADER, SCRIPT_HEADER] {
            assert!(
                header.contains(ATTRIBUTION_MARKER),
                "template does not embed the attribution marker:\n{header}"
            );
        }
    }

    #[test]
    fn test_templates_are_trimmed() {
        for header in [STYLE_SHEET_HEADER, MARKUP_HEADER, SCRIPT_HEADER] {
            assert_eq!(header, header.trim(), "template carries stray whitespace");
        }
    }

    #[test]
    fn test_header_for_matches_comment_syntax() {
        assert!(header_for(SyntaxFamily::StyleSheet).starts_with("/*\n"));
        assert!(header_for(SyntaxFamily::Markup).starts_with("<!--"));
        assert!(header_for(SyntaxFamily::Markup).ends_with("-->"));
        assert!(header_for(SyntaxFamily::Script).starts_with("/**\n * @license"));
    }
}
