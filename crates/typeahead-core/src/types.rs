//! Core types for typeahead-core.
//!
//! A [`Hit`] is what a search source hands back for a query. The state
//! machine only cares about order and identity; the label, highlight markup
//! and raw record fields exist for front-ends.

use serde::{Deserialize, Serialize};

/// One search result, in the order the source ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Stable identity of the underlying record (`objectID` for Algolia).
    pub id: String,
    /// Plain display text.
    pub label: String,
    /// Display text with matched spans wrapped in the source's highlight
    /// tags, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,
    /// The raw record as returned by the source.
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// A run of display text, either inside or outside a highlighted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl Hit {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            highlighted: None,
            fields: serde_json::Map::new(),
        }
    }

    pub fn with_highlighted(mut self, highlighted: impl Into<String>) -> Self {
        self.highlighted = Some(highlighted.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Split the display text into matched / unmatched runs using the given
    /// highlight tags. Falls back to the plain label when no highlighted form
    /// is present. An unterminated `pre` tag highlights to the end of the text.
    pub fn segments<'a>(&'a self, pre: &str, post: &str) -> Vec<Segment<'a>> {
        let Some(marked) = self.highlighted.as_deref() else {
            return vec![Segment { text: &self.label, matched: false }];
        };
        if pre.is_empty() || post.is_empty() {
            return vec![Segment { text: marked, matched: false }];
        }

        let mut segments = Vec::new();
        let mut rest = marked;
        while let Some(start) = rest.find(pre) {
            push_segment(&mut segments, &rest[..start], false);
            rest = &rest[start + pre.len()..];
            match rest.find(post) {
                Some(end) => {
                    push_segment(&mut segments, &rest[..end], true);
                    rest = &rest[end + post.len()..];
                }
                None => {
                    push_segment(&mut segments, rest, true);
                    rest = "";
                }
            }
        }
        push_segment(&mut segments, rest, false);
        segments
    }
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, matched: bool) {
    if !text.is_empty() {
        segments.push(Segment { text, matched });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
