//! The request tree and its XML serialization.
//!
//! An [`Element`] is a tag name, an ordered set of string attributes, and an
//! ordered list of children. Attribute order is insertion order; setting an
//! existing attribute replaces its value in place.

use std::borrow::Cow;
use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::name::QName;

/// Render a boolean the way the wire format expects it.
#[must_use]
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Escape an attribute value.
///
/// On top of the markup characters, `\n`, `\r` and `\t` become character
/// references so that attribute-value normalization on the reading side keeps
/// them intact.
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\n', '\r', '\t']) {
        return escaped;
    }
    Cow::Owned(
        escaped
            .replace('\n', "&#10;")
            .replace('\r', "&#13;")
            .replace('\t', "&#9;"),
    )
}

/// A node of the request tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// An element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of attribute `name`, if set.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child elements in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child called `tag`.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Set attribute `name`, replacing an existing value in place.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_owned(), value)),
        }
        self
    }

    /// Set attribute `name` only when `value` is present.
    pub fn set_opt<V: Into<String>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(name, v);
        }
        self
    }

    /// Set attribute `name` to `"true"` or `"false"`.
    pub fn set_bool(&mut self, name: &str, value: bool) -> &mut Self {
        self.set(name, bool_str(value))
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Append a new empty child called `tag` and return it.
    pub fn child(&mut self, tag: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append an already built child.
    pub fn push(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Serialize this element and its descendants.
    ///
    /// Elements without children are written in self-closing form. Attribute
    /// values are escaped with [`escape_attr`].
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new(Vec::with_capacity(256));
        // `Vec<u8>` never fails as `io::Write`.
        let _ = self.write_to(&mut writer);
        writer.into_inner()
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let attributes = self.attributes.iter().map(|(name, value)| Attribute {
            key: QName(name.as_bytes()),
            value: match escape_attr(value) {
                Cow::Borrowed(v) => Cow::Borrowed(v.as_bytes()),
                Cow::Owned(v) => Cow::Owned(v.into_bytes()),
            },
        });
        let start = writer
            .create_element(self.tag.as_str())
            .with_attributes(attributes);
        if self.children.is_empty() {
            start.write_empty()?;
        } else {
            start.write_inner_content(|w| {
                for child in &self.children {
                    child.write_to(w)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }
}
