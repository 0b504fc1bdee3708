//! Publication translation — a stateless request/response flow, fully
//! independent of the mutation protocol.
//!
//! The offer gate is a pure comparison of two language tags: translation is
//! offered only when the content's primary language differs from the user's
//! locale, ignoring region subtags. No pre-flight detection call is made.
//! Markdown is stripped from the source text before it is sent, so syntax
//! tokens are never translated.

pub mod client;

use pulldown_cmark::{Event, Parser, Tag};
use serde::{Deserialize, Serialize};

use crate::shared::LanguageTag;

/// Result of a translation request. Transient; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub detected_source_language: LanguageTag,
    pub translated_text: String,
}

/// Whether to offer translation for content in `content_language` to a user
/// with `user_locale`. Pure; `en-US` content is not offered to an `en-GB`
/// user.
pub fn should_offer_translation(
    user_locale: &LanguageTag,
    content_language: &LanguageTag,
) -> bool {
    !user_locale.same_primary_language(content_language)
}

/// Reduce markdown to its plain text: headings, emphasis, links, and list
/// markers are dropped, inline code is kept verbatim, block boundaries
/// become newlines.
pub fn strip_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for event in Parser::new(text) {
        match event {
            Event::Text(t) => out.push_str(&t),
            Event::Code(c) => out.push_str(&c),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Start(Tag::Paragraph | Tag::Heading { .. } | Tag::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Decode HTML entities the translation provider leaves in its output
/// (`&amp;` → `&`, `&#39;` → `'`).
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_heading_and_emphasis() {
        assert_eq!(strip_markdown("# Hello *world*"), "Hello world");
    }

    #[test]
    fn strips_link_syntax_keeps_label() {
        assert_eq!(strip_markdown("see [the docs](https://example.org)"), "see the docs");
    }

    #[test]
    fn keeps_inline_code_verbatim() {
        assert_eq!(strip_markdown("run `canopy --help` first"), "run canopy --help first");
    }

    #[test]
    fn separates_blocks_with_newlines() {
        assert_eq!(strip_markdown("first\n\nsecond"), "first\nsecond");
        assert_eq!(strip_markdown("- one\n- two"), "one\ntwo");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markdown("nothing fancy here"), "nothing fancy here");
    }

    #[test]
    fn decodes_html_entities() {
        assert_eq!(decode_entities("fish &amp; chips"), "fish & chips");
        assert_eq!(decode_entities("it&#39;s fine"), "it's fine");
        assert_eq!(decode_entities("no entities"), "no entities");
    }

    #[test]
    fn offer_gate_ignores_region_subtags() {
        let en_us = LanguageTag::from("en-US");
        assert!(!should_offer_translation(&en_us, &LanguageTag::from("en-GB")));
        assert!(should_offer_translation(&en_us, &LanguageTag::from("fr-FR")));
    }
}
