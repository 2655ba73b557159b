//! Generic element construction: a tag name plus a small set of optional
//! properties. This is the only way the rest of the crate makes elements.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Optional properties applied when constructing an element. Unset options
/// leave the element untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Params<'a> {
    /// The `id` attribute.
    pub id: Option<&'a str>,

    /// The `class` attribute.
    pub class: Option<&'a str>,

    /// Text content.
    pub text: Option<&'a str>,

    /// The `value` attribute (inputs and options.)
    pub value: Option<&'a str>,
}

impl<'a> Params<'a> {
    /// No properties; every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `id` attribute.
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the `class` attribute.
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the text content.
    pub fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    /// Set the `value` attribute.
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }
}

/// Construct an element of the given tag, applying whichever properties are
/// set.
///
/// ## Errors
///
/// Fails only if the document refuses the tag name.
pub fn create(document: &Document, tag: &str, params: Params<'_>) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;

    if let Some(id) = params.id {
        el.set_id(id);
    }

    if let Some(class) = params.class {
        el.set_class_name(class);
    }

    if let Some(text) = params.text {
        el.set_text_content(Some(text));
    }

    if let Some(value) = params.value {
        el.set_attribute("value", value)?;
    }

    Ok(el)
}
