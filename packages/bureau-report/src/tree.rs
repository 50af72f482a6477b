//! Generic XML tree: every element's children are addressable by tag name.
//!
//! The tree makes no distinction between elements that may occur once and
//! elements that may repeat. Every child collection is a sequence, and
//! deciding whether to take the first entry is left to the caller.

use std::collections::BTreeMap;

use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;

use crate::config::MAX_NESTING_DEPTH;
use crate::error::{ReportError, Result};

/// A parsed XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenericNode {
    /// Local tag name (namespace prefix dropped).
    pub name: String,

    /// Direct text content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child elements and merged attributes, keyed by name, in source order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Vec<GenericNode>>,
}

impl GenericNode {
    /// Create an empty element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a leaf element carrying a text value.
    #[must_use]
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            children: BTreeMap::new(),
        }
    }

    /// Append a child element, keeping source order within its tag.
    #[must_use]
    pub fn with_child(mut self, child: GenericNode) -> Self {
        self.push_child(child);
        self
    }

    /// Append a child element in place.
    pub fn push_child(&mut self, child: GenericNode) {
        self.children
            .entry(child.name.clone())
            .or_default()
            .push(child);
    }

    /// All children with the given tag, empty when the tag is absent.
    ///
    /// # Examples
    /// ```
    /// use bureau_report::tree::parse_document;
    ///
    /// let root = parse_document("<r><item>1</item><item>2</item></r>").unwrap();
    /// assert_eq!(root.all("item").len(), 2);
    /// assert!(root.all("missing").is_empty());
    /// ```
    #[must_use]
    pub fn all(&self, tag: &str) -> &[GenericNode] {
        self.children.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// First child with the given tag.
    #[must_use]
    pub fn first(&self, tag: &str) -> Option<&GenericNode> {
        self.all(tag).first()
    }

    /// Follow a path of tag names, taking the first element at every step.
    ///
    /// Yields `None` as soon as a step is missing.
    ///
    /// # Examples
    /// ```
    /// use bureau_report::tree::parse_document;
    ///
    /// let root = parse_document("<r><a><b>x</b></a></r>").unwrap();
    /// assert_eq!(root.lookup(&["a", "b"]).and_then(|n| n.text()), Some("x"));
    /// assert!(root.lookup(&["a", "c", "b"]).is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&GenericNode> {
        path.iter().try_fold(self, |node, tag| node.first(tag))
    }

    /// Text value of this element.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

}

/// Parse XML text into a [`GenericNode`] rooted at the document element.
///
/// # Errors
/// Returns `ReportError::MalformedDocument` when the text is not well-formed
/// or nests elements deeper than [`MAX_NESTING_DEPTH`]. A `DOCTYPE`
/// declaration, internal subset included, is accepted.
///
/// # Examples
/// ```
/// use bureau_report::tree::parse_document;
///
/// let root = parse_document(r#"<SCORE kind="bureau"><BureauScore>742</BureauScore></SCORE>"#).unwrap();
/// assert_eq!(root.name, "SCORE");
/// assert_eq!(root.first("kind").and_then(|n| n.text()), Some("bureau"));
/// assert!(parse_document("<SCORE>").is_err());
/// ```
pub fn parse_document(xml: &str) -> Result<GenericNode> {
    if exceeds_depth(xml, MAX_NESTING_DEPTH) {
        return Err(ReportError::MalformedDocument(format!(
            "elements nested deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = convert_element(doc.root_element());
    tracing::debug!(root = %root.name, "Parsed XML document");
    Ok(root)
}

/// Scan the raw text for element nesting beyond `limit`.
///
/// Runs before the parser so that deep documents are rejected without
/// recursing. Comments, processing instructions, CDATA sections and
/// declarations are skipped. Text that cannot be scanned to the end is left
/// for the parser to report.
fn exceeds_depth(xml: &str, limit: usize) -> bool {
    let bytes = xml.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(offset) = xml[pos..].find('<') {
        let start = pos + offset;
        let rest = &xml[start..];

        let skip_to = |terminator: &str| {
            rest.find(terminator)
                .map(|end| start + end + terminator.len())
        };

        let next = if rest.starts_with("<!--") {
            skip_to("-->")
        } else if rest.starts_with("<![CDATA[") {
            skip_to("]]>")
        } else if rest.starts_with("<?") {
            skip_to("?>")
        } else if rest.starts_with("<!") {
            // DOCTYPE with an internal subset closes on `]` followed by `>`.
            match (rest.find('['), rest.find('>')) {
                (Some(open), Some(close)) if open < close => rest[open..]
                    .find(']')
                    .and_then(|end| rest[open + end..].find('>').map(|gt| open + end + gt))
                    .map(|gt| start + gt + 1),
                (_, Some(close)) => Some(start + close + 1),
                _ => None,
            }
        } else if rest.starts_with("</") {
            depth = depth.saturating_sub(1);
            skip_to(">")
        } else {
            let end = tag_end(bytes, start + 1);
            if let Some(end) = end {
                if bytes[end - 1] != b'/' {
                    depth += 1;
                    if depth > limit {
                        return true;
                    }
                }
            }
            end.map(|gt| gt + 1)
        };

        match next {
            Some(next) => pos = next,
            None => return false,
        }
    }

    false
}

/// Index of the `>` closing a start tag, ignoring any inside quoted values.
fn tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote = None;
    for (index, &byte) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None if byte == b'"' || byte == b'\'' => quote = Some(byte),
            None if byte == b'>' => return Some(index),
            None => {}
        }
    }
    None
}

/// Convert a roxmltree element and its subtree.
fn convert_element(node: Node<'_, '_>) -> GenericNode {
    let mut converted = GenericNode::new(node.tag_name().name());

    for attr in node.attributes() {
        converted
            .children
            .insert(attr.name().to_string(), vec![GenericNode::leaf(attr.name(), attr.value())]);
    }

    // Attribute entries are replaced by the first same-named child element.
    let mut replaced: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut has_text = false;
    let mut has_elements = false;

    for child in node.children() {
        if child.is_element() {
            has_elements = true;
            let element = convert_element(child);
            let is_attribute_slot = node.attribute(element.name.as_str()).is_some()
                && !replaced.contains(&element.name);
            if is_attribute_slot {
                replaced.push(element.name.clone());
                converted
                    .children
                    .insert(element.name.clone(), vec![element]);
            } else {
                converted.push_child(element);
            }
        } else if child.is_text() {
            if let Some(t) = child.text() {
                has_text = true;
                text.push_str(t);
            }
        }
    }

    converted.text = if !has_text || (has_elements && text.trim().is_empty()) {
        None
    } else {
        Some(text)
    };

    converted
}
