use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Button that shows the greeting dialog when clicked.
pub const ALERT_BUTTON: &str = "test";
/// Text input holding the movie title to look up.
pub const MOVIE_INPUT: &str = "movie";
/// Container that receives the lookup response markup.
pub const RESPONSE_OUTPUT: &str = "getrespmsg";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    TextInput,
    Container,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Current text of a `TextInput`; always empty for other kinds.
    pub value: String,
    /// Markup content, stored verbatim.
    pub inner_html: String,
    /// Number of greeting handlers attached to this element.
    pub click_alert_bindings: usize,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            value: String::new(),
            inner_html: String::new(),
            click_alert_bindings: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element not found: #{0}")]
    ElementNotFound(ElementId),
    #[error("element #{0} is not a text input")]
    NotATextInput(ElementId),
}

/// Element store addressed by id. Owned by the page state and handed around
/// explicitly; there is no global document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The movie lookup page: greeting button, title input and response container.
    pub fn movie_page() -> Self {
        Self::new()
            .with_element(ALERT_BUTTON, ElementKind::Button)
            .with_element(MOVIE_INPUT, ElementKind::TextInput)
            .with_element(RESPONSE_OUTPUT, ElementKind::Container)
    }

    pub fn with_element(mut self, id: impl Into<ElementId>, kind: ElementKind) -> Self {
        self.insert(id, kind);
        self
    }

    /// Adds an element, replacing any existing element with the same id.
    pub fn insert(&mut self, id: impl Into<ElementId>, kind: ElementKind) {
        self.elements.insert(id.into(), Element::new(kind));
    }

    pub fn get(&self, id: &ElementId) -> Result<&Element, DomError> {
        self.elements
            .get(id)
            .ok_or_else(|| DomError::ElementNotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &ElementId) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::ElementNotFound(id.clone()))
    }

    pub fn value(&self, id: &ElementId) -> Result<&str, DomError> {
        let element = self.get(id)?;
        if element.kind != ElementKind::TextInput {
            return Err(DomError::NotATextInput(id.clone()));
        }
        Ok(&element.value)
    }

    pub fn set_value(&mut self, id: &ElementId, value: impl Into<String>) -> Result<(), DomError> {
        let element = self.get_mut(id)?;
        if element.kind != ElementKind::TextInput {
            return Err(DomError::NotATextInput(id.clone()));
        }
        element.value = value.into();
        Ok(())
    }

    pub fn inner_html(&self, id: &ElementId) -> Result<&str, DomError> {
        Ok(&self.get(id)?.inner_html)
    }

    /// Replaces the element content with `html` as-is; nothing is escaped.
    pub fn set_inner_html(
        &mut self,
        id: &ElementId,
        html: impl Into<String>,
    ) -> Result<(), DomError> {
        self.get_mut(id)?.inner_html = html.into();
        Ok(())
    }

    pub fn bind_click_alert(&mut self, id: &ElementId) -> Result<(), DomError> {
        self.get_mut(id)?.click_alert_bindings += 1;
        Ok(())
    }

    /// Handlers attached to `id`; zero for unknown elements.
    pub fn click_alert_bindings(&self, id: &ElementId) -> usize {
        self.elements
            .get(id)
            .map_or(0, |element| element.click_alert_bindings)
    }
}
