/// Landing page domain list: search filtering and entry removal
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::filter::{Needle, Visibility};

/// Text of the item's first link, or "" when it has none
fn item_label(item: &Element) -> String {
    item.query_selector("a")
        .ok()
        .flatten()
        .and_then(|link| link.text_content())
        .unwrap_or_default()
}

fn set_visibility(item: &Element, visibility: Visibility) {
    let Some(item) = item.dyn_ref::<HtmlElement>() else {
        return;
    };

    let style = item.style();
    let result = match visibility {
        Visibility::Shown => style.remove_property("display").map(|_| ()),
        Visibility::Hidden => style.set_property("display", visibility.display_value()),
    };
    if let Err(e) = result {
        log::warn!("Failed to set display on list item: {:?}", e);
    }
}

/// Show the items whose link text contains the search box value, hide the rest.
///
/// Returns the number of items left visible, or `None` when the search box or
/// list container is missing from the page.
pub fn filter_list(document: &Document, config: &PageConfig) -> Option<usize> {
    let Some(input) = document
        .get_element_by_id(&config.search_input_id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::warn!("No search input #{}", config.search_input_id);
        return None;
    };

    let Some(list) = document.get_element_by_id(&config.list_id) else {
        log::warn!("No domain list #{}", config.list_id);
        return None;
    };

    let items = match list.query_selector_all(&config.item_selector) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Bad item selector {:?}: {:?}", config.item_selector, e);
            return None;
        }
    };

    let filter = input.value();
    let needle = Needle::new(&filter);
    let mut shown = 0;

    for index in 0..items.length() {
        let Some(item) = items.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let visibility = needle.visibility(&item_label(&item));
        if visibility == Visibility::Shown {
            shown += 1;
        }
        set_visibility(&item, visibility);
    }

    log::debug!("Filter {:?}: {} of {} items shown", filter, shown, items.length());
    Some(shown)
}

/// Remove the element with `element_id` from the document; false if absent
pub fn remove_entry(document: &Document, element_id: &str) -> bool {
    match document.get_element_by_id(element_id) {
        Some(entry) => {
            entry.remove();
            true
        }
        None => false,
    }
}
