/// Page-ready initialization
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use crate::config;
use crate::error::PageError;
use crate::ui::browser;
use crate::ui::panels;

fn bind(document: &Document) {
    let config = config::current();
    let count = panels::bind_collapsibles(document, &config);
    log::info!("{} collapsible panels bound", count);
}

/// Bind collapsibles matching the current config, if the document is parsed.
///
/// While the document is still loading the `DOMContentLoaded` handler
/// installed by [`init`] does the binding with whatever config is current then.
pub fn rebind() -> Result<(), PageError> {
    let document = browser::document()?;
    if document.ready_state() != "loading" {
        bind(&document);
    }
    Ok(())
}

/// Bind the page's collapsibles once the document has been parsed
pub fn init() -> Result<(), PageError> {
    let document = browser::document()?;

    if document.ready_state() != "loading" {
        bind(&document);
        return Ok(());
    }

    let on_ready = {
        let document = document.clone();
        Closure::once_into_js(move || bind(&document))
    };
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(PageError::from_js)
}
