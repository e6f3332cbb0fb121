/// CSP Admin Page - controller for the CSP report admin pages
/// Built with Rust + WASM

pub mod config;
pub mod deleter;
pub mod error;
pub mod filter;
pub mod panel;
pub mod site;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::ui::browser::{BrowserHost, FetchEndpoint};

// Set up panic hook and console logging, then bind the page
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = ui::page::init() {
        log::error!("Page controller init failed: {}", e);
    }
}

/// Override the default page config. Collapsible controls matching a new
/// `collapsibleClass` are bound right away; controls already bound keep
/// their listener and pick up a new `activeClass` on the next click.
#[wasm_bindgen(js_name = configurePage)]
pub fn configure_page(value: JsValue) -> Result<(), JsValue> {
    let parsed: PageConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| PageError::InvalidConfig(e.to_string()))?;
    config::install(parsed).map_err(PageError::InvalidConfig)?;
    ui::page::rebind()?;
    Ok(())
}

// Called from the search box's onkeyup
#[wasm_bindgen(js_name = filterList)]
pub fn filter_list() {
    match ui::browser::document() {
        Ok(document) => {
            ui::domain_list::filter_list(&document, &config::current());
        }
        Err(e) => log::warn!("filterList: {}", e),
    }
}

/// Confirm, request deletion of `root_domain`, and drop its list entry on
/// success. Resolves to "aborted", "removed" or "failed".
#[wasm_bindgen(js_name = deleteSite)]
pub async fn delete_site(root_domain: String, list_item_id: String) -> Result<JsValue, JsValue> {
    let config = config::current();
    let host = BrowserHost::new()?;
    let endpoint = FetchEndpoint::new(host.window().clone(), config.delete_timeout_ms);

    let outcome =
        deleter::delete_site(&host, &endpoint, &config, &root_domain, &list_item_id).await;
    Ok(JsValue::from_str(outcome.as_str()))
}
