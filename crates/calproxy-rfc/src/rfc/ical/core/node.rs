//! Node tree types for parsed iCalendar content.

use crate::rfc::ical::build;
use crate::rfc::ical::parse::{self, ParseResult};

/// One leaf `Name:Value` logical line.
///
/// The name keeps any parameters the line carried (`DTEND;TZID=...`); the
/// value holds unescaped text. No per-property value typing happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, parameters included.
    pub name: String,
    /// Unescaped value text.
    pub value: String,
}

impl Property {
    /// Creates a new property.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns whether the property name starts with `prefix`.
    ///
    /// Useful for names like DTEND, which may be suffixed with a timezone
    /// parameter.
    #[must_use]
    pub fn name_has_prefix(&self, prefix: &str) -> bool {
        self.name.starts_with(prefix)
    }
}

/// A `BEGIN:<name>`…`END:<name>` block.
///
/// Properties and nested components are kept in one ordered sequence so
/// serialization reproduces the input ordering exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Component {
    /// Block discriminator (the value of the BEGIN line).
    pub name: String,
    /// Block body in order of appearance.
    pub nodes: Vec<Node>,
}

impl Component {
    /// Creates an empty component with the given discriminator.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Appends a property to the block body.
    pub fn add_property(&mut self, property: Property) {
        self.nodes.push(Node::Property(property));
    }

    /// Appends a nested component to the block body.
    pub fn add_component(&mut self, component: Component) {
        self.nodes.push(Node::Component(component));
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties().find(|p| p.name == name)
    }

    /// Iterates over the direct properties of this block.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.nodes.iter().filter_map(Node::as_property)
    }

    /// Iterates mutably over the direct properties of this block.
    pub fn properties_mut(&mut self) -> impl Iterator<Item = &mut Property> {
        self.nodes.iter_mut().filter_map(Node::as_property_mut)
    }

    /// Iterates over the directly nested components of this block.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.nodes.iter().filter_map(Node::as_component)
    }

    /// Iterates mutably over the directly nested components of this block.
    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.nodes.iter_mut().filter_map(Node::as_component_mut)
    }
}

/// One entry in a block body.
///
/// The start/leaf distinction is a tagged variant, so a leaf with children
/// cannot be represented at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A flat `Name:Value` line.
    Property(Property),
    /// A nested block.
    Component(Component),
}

impl Node {
    /// Returns the property if this node is a leaf.
    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(property) => Some(property),
            Self::Component(_) => None,
        }
    }

    /// Returns the property mutably if this node is a leaf.
    #[must_use]
    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            Self::Property(property) => Some(property),
            Self::Component(_) => None,
        }
    }

    /// Returns the component if this node is a block.
    #[must_use]
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            Self::Property(_) => None,
        }
    }

    /// Returns the component mutably if this node is a block.
    #[must_use]
    pub fn as_component_mut(&mut self) -> Option<&mut Component> {
        match self {
            Self::Component(component) => Some(component),
            Self::Property(_) => None,
        }
    }
}

/// A fully parsed iCalendar document.
///
/// Produced only by a successful parse: every element is a VCALENDAR block
/// and no partial document ever escapes the parser. A document is created
/// once, mutated in place by one caller, and serialized once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Top-level calendar objects in order of appearance.
    pub calendars: Vec<Component>,
}

impl Document {
    /// Parses iCalendar text into a document.
    ///
    /// Accepts CRLF, LF, or mixed line endings and unfolds RFC 5545
    /// continuation lines before block parsing.
    ///
    /// ## Errors
    /// Returns a [`parse::ParseError`] carrying the offending logical line
    /// index and raw content if the input is malformed.
    pub fn parse(input: &str) -> ParseResult<Self> {
        parse::parse_document(&parse::normalize(input))
    }

    /// Serializes the document back to folded, CRLF-terminated bytes.
    ///
    /// Never fails on a tree produced by [`Document::parse`].
    ///
    /// # Panics
    /// Panics if a caller stored a property under a reserved structural name
    /// (`BEGIN`/`END`); that is a caller bug, not a data error.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        build::serialize(self)
    }
}
