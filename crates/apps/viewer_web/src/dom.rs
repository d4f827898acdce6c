use scene::{DisplayError, DisplaySink, Field};
use web_sys::Document;

use crate::mapbox::js_message;

/// Side panel and legend, addressed by element id and CSS selector.
pub struct DomDisplay {
    document: Document,
}

impl DomDisplay {
    pub fn from_window() -> Result<Self, DisplayError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DisplayError::Dom("no document".to_string()))?;
        Ok(Self { document })
    }
}

impl DisplaySink for DomDisplay {
    fn set_text(&mut self, field: Field, text: &str) -> Result<(), DisplayError> {
        let id = field.element_id();
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| DisplayError::MissingElement(format!("#{id}")))?;
        element.set_text_content(Some(text));
        Ok(())
    }

    fn append_fragment(&mut self, container: &str, html: &str) -> Result<(), DisplayError> {
        let element = self
            .document
            .query_selector(container)
            .map_err(|e| DisplayError::Dom(js_message(&e)))?
            .ok_or_else(|| DisplayError::MissingElement(container.to_string()))?;
        element
            .insert_adjacent_html("beforeend", html)
            .map_err(|e| DisplayError::Dom(js_message(&e)))
    }
}
