//! In-memory DOM model
//!
//! Stands in for the browser page in tests: the `#display` input, the
//! `#history` list, keypad buttons, and `window.alert` calls.

use std::collections::HashMap;

/// Id of the display input
pub const DISPLAY_ID: &str = "display";
/// Id of the history list
pub const HISTORY_ID: &str = "history";
/// Id of the keypad container
pub const KEYPAD_ID: &str = "keypad";

/// Node in the mock page tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// `id` attribute; empty for anonymous nodes
    pub id: String,
    /// Lowercase tag, e.g. `button`
    pub tag: String,
    /// `textContent`
    pub text_content: String,
    /// `value` of input elements
    pub value: String,
    pub attributes: HashMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Anonymous, empty `<tag>`
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            value: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// `classList.add`
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// `getAttribute`
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Browser events the calculator listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Target id
        element_id: String,
    },
    /// `keydown` on the window
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock page for exercising the browser frontend without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    events: Vec<DomEvent>,
    /// Messages passed to `window.alert`
    alerts: Vec<String>,
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page skeleton: display input and history list
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.insert(
            DomElement::new("input")
                .with_id(DISPLAY_ID)
                .with_attr("type", "text")
                .with_attr("readonly", "true"),
        );
        dom.insert(DomElement::new("ul").with_id(HISTORY_ID));
        dom
    }

    /// Makes `element` reachable by its id; anonymous elements are dropped
    pub fn insert(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// `getElementById`
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Appends to the dispatch log
    pub fn log_event(&mut self, event: DomEvent) {
        self.events.push(event);
    }

    /// Dispatched events, oldest first
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    /// Assigns `value`; unknown ids are ignored
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(input) = self.element_mut(id) {
            value.clone_into(&mut input.value);
        }
    }

    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.element(id).map(|input| input.value.as_str())
    }

    /// `appendChild`, also indexing the child by id
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        match self.elements.get_mut(parent_id) {
            Some(parent) => parent.children.push(child.clone()),
            None => return,
        }
        self.insert(child);
    }

    /// Removes every child of an element
    pub fn clear_children(&mut self, id: &str) {
        let Some(parent) = self.elements.get_mut(id) else {
            return;
        };
        let removed: Vec<String> = parent
            .children
            .drain(..)
            .map(|c| c.id)
            .filter(|child_id| !child_id.is_empty())
            .collect();
        for child_id in removed {
            self.elements.remove(&child_id);
        }
    }

    /// Returns the text of each child of an element
    #[must_use]
    pub fn child_texts(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|e| e.children.iter().map(|c| c.text_content.clone()).collect())
            .unwrap_or_default()
    }

    /// Records a `window.alert` call
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Returns every alert shown so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement =====

    #[test]
    fn test_dom_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("numbers")
            .with_class("numbers")
            .with_attr("data-key", "7");

        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert_eq!(elem.classes, vec!["numbers"]);
        assert!(elem.has_class("numbers"));
        assert_eq!(elem.attr("data-key"), Some("7"));
        assert_eq!(elem.attr("missing"), None);
    }

    #[test]
    fn test_dom_element_default_is_div() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_children() {
        let parent = DomElement::new("ul").with_child(DomElement::new("li").with_text("a"));
        assert_eq!(parent.children.len(), 1);
    }

    // ===== DomEvent =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".into()
            }
        );
    }

    // ===== MockDom =====

    #[test]
    fn test_calculator_skeleton() {
        let dom = MockDom::calculator();
        assert_eq!(dom.element(DISPLAY_ID).unwrap().tag, "input");
        assert_eq!(dom.element(HISTORY_ID).unwrap().tag, "ul");
        assert_eq!(dom.value(DISPLAY_ID), Some(""));
    }

    #[test]
    fn test_register_ignores_anonymous() {
        let mut dom = MockDom::new();
        dom.insert(DomElement::new("div"));
        assert!(dom.element("").is_none());
    }

    #[test]
    fn test_set_value() {
        let mut dom = MockDom::calculator();
        dom.set_value(DISPLAY_ID, "42");
        assert_eq!(dom.value(DISPLAY_ID), Some("42"));
        dom.set_value("missing", "1");
        assert_eq!(dom.value("missing"), None);
    }

    #[test]
    fn test_append_and_clear_children() {
        let mut dom = MockDom::calculator();
        dom.append_child(HISTORY_ID, DomElement::new("li").with_id("h-0").with_text("1 + 1 = 2"));
        dom.append_child(HISTORY_ID, DomElement::new("li").with_text("2 + 2 = 4"));

        assert_eq!(dom.child_texts(HISTORY_ID), vec!["1 + 1 = 2", "2 + 2 = 4"]);
        assert!(dom.element("h-0").is_some());

        dom.clear_children(HISTORY_ID);
        assert!(dom.child_texts(HISTORY_ID).is_empty());
        assert!(dom.element("h-0").is_none());
    }

    #[test]
    fn test_clear_children_missing_parent() {
        let mut dom = MockDom::new();
        dom.clear_children("nothing");
        assert!(dom.child_texts("nothing").is_empty());
    }

    #[test]
    fn test_get_element_mut() {
        let mut dom = MockDom::calculator();
        dom.element_mut(HISTORY_ID).unwrap().add_class("history-list");
        assert!(dom.element(HISTORY_ID).unwrap().has_class("history-list"));
    }

    #[test]
    fn test_event_history_and_alerts() {
        let mut dom = MockDom::new();
        dom.log_event(DomEvent::key_down("5"));
        dom.alert("Error: Cannot divide by zero!");

        assert_eq!(dom.events(), &[DomEvent::key_down("5")]);
        assert_eq!(dom.alerts(), &["Error: Cannot divide by zero!".to_string()]);
    }
}
