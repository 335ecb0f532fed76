//! Mock DOM for browser-frontend testing.
//!
//! A small observable stand-in for the page: an element tree, an event
//! log, and a string map playing the role of `localStorage`. It lets the
//! whole browser wiring - display sync, keypad clicks, theme classes,
//! preference persistence - run and be asserted on natively, without
//! web-sys or a browser.

use std::collections::HashMap;

use crate::theme::{StoreError, Theme, ThemeStore};

/// A DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID (builder style)
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content (builder style)
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class (builder style)
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Adds a child (builder style)
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class if present
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns true if the class is present
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Finds a descendant (or self) by ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Finds a descendant (or self) by ID, mutably
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }
}

/// Kinds of events the mock records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEventKind {
    /// A pointer click on an element
    Click,
    /// A key press
    KeyDown,
}

/// A recorded DOM event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    /// Event kind
    pub kind: DomEventKind,
    /// Target element ID (empty for document-level key events)
    pub target: String,
    /// Key name for key events
    pub key: Option<String>,
}

impl DomEvent {
    /// A click on the element with the given ID
    #[must_use]
    pub fn click(target: &str) -> Self {
        Self {
            kind: DomEventKind::Click,
            target: target.to_string(),
            key: None,
        }
    }

    /// A document-level key press
    #[must_use]
    pub fn keydown(key: &str) -> Self {
        Self {
            kind: DomEventKind::KeyDown,
            target: String::new(),
            key: Some(key.to_string()),
        }
    }
}

/// The mock page: element tree, event log, and storage map
#[derive(Debug, Clone, PartialEq)]
pub struct MockDom {
    body: DomElement,
    storage: HashMap<String, String>,
    events: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: DomElement::new("body"),
            storage: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Creates the calculator page skeleton: the two readout fields and
    /// the theme toggle. Keypad buttons are installed separately.
    #[must_use]
    pub fn calculator() -> Self {
        let body = DomElement::new("body").with_child(
            DomElement::new("div").with_id("calculator").with_child(
                DomElement::new("div")
                    .with_id("display")
                    .with_child(
                        DomElement::new("p")
                            .with_id("previous-operand")
                            .with_class("previous-operand"),
                    )
                    .with_child(
                        DomElement::new("p")
                            .with_id("current-operand")
                            .with_class("current-operand")
                            .with_text("0"),
                    ),
            )
            .with_child(DomElement::new("button").with_id("theme-toggle"))
            .with_child(DomElement::new("div").with_id("keypad")),
        );
        Self {
            body,
            storage: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// The page body
    #[must_use]
    pub fn body(&self) -> &DomElement {
        &self.body
    }

    /// The page body, mutably
    pub fn body_mut(&mut self) -> &mut DomElement {
        &mut self.body
    }

    /// Finds an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.body.find_by_id(id)
    }

    /// Finds an element by ID, mutably
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.body.find_by_id_mut(id)
    }

    /// Reads an element's text content
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Sets an element's text content; false if the element is missing
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.get_element_mut(id) {
            Some(element) => {
                element.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.events.push(event);
    }

    /// The recorded events, oldest first
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    /// Clears the event log
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Reads a storage slot
    #[must_use]
    pub fn storage_get(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    /// Writes a storage slot
    pub fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_string(), value.to_string());
    }

    /// Removes a storage slot
    pub fn storage_remove(&mut self, key: &str) {
        self.storage.remove(key);
    }
}

/// The mock's storage map doubles as the injected preference store,
/// exactly the way `localStorage` does on the real page.
impl ThemeStore for MockDom {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self
            .storage_get(Theme::STORAGE_KEY)
            .and_then(Theme::from_name))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.storage_set(Theme::STORAGE_KEY, theme.name());
        Ok(())
    }
}
