/// Collapsible report panels
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::PageConfig;
use crate::panel::{PanelDisplay, explicit_target};

/// Content panel for a control: the element it names explicitly, else its next sibling
fn resolve_panel(document: &Document, control: &Element) -> Option<Element> {
    let aria_controls = control.get_attribute("aria-controls");
    let data_target = control.get_attribute("data-target");

    explicit_target(aria_controls.as_deref(), data_target.as_deref())
        .and_then(|id| document.get_element_by_id(id))
        .or_else(|| control.next_element_sibling())
}

/// Handle one click on a collapsible control.
///
/// Returns the panel's new state, or `None` when the control has no panel.
pub fn toggle(document: &Document, control: &Element, active_class: &str) -> Option<PanelDisplay> {
    if let Err(e) = control.class_list().toggle(active_class) {
        log::warn!("Failed to toggle class {}: {:?}", active_class, e);
    }

    let Some(panel) = resolve_panel(document, control) else {
        log::debug!("Collapsible control has no content panel");
        return None;
    };
    let panel = panel.dyn_into::<HtmlElement>().ok()?;

    let style = panel.style();
    let current = style.get_property_value("display").unwrap_or_default();
    let next = PanelDisplay::from_inline(&current).toggled();

    if let Err(e) = style.set_property("display", next.as_inline()) {
        log::warn!("Failed to set panel display: {:?}", e);
        return None;
    }
    if let Err(e) = control.set_attribute("aria-expanded", next.aria_expanded()) {
        log::warn!("Failed to set aria-expanded: {:?}", e);
    }

    Some(next)
}

const BOUND_ATTR: &str = "data-collapsible-bound";

/// Attach a click listener to every collapsible control not bound yet.
///
/// Returns the number of controls newly bound, so calling this again after a
/// config change only picks up the new class. The active class is read from
/// the current config on every click. Listeners live as long as the page.
pub fn bind_collapsibles(document: &Document, config: &PageConfig) -> usize {
    // The collection is live, so take a snapshot before touching the DOM
    let collection = document.get_elements_by_class_name(&config.collapsible_class);
    let controls: Vec<Element> = (0..collection.length())
        .filter_map(|index| collection.item(index))
        .filter(|control| !control.has_attribute(BOUND_ATTR))
        .collect();

    let mut bound = 0;
    for control in &controls {
        let document = document.clone();
        let target = control.clone();

        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            toggle(&document, &target, &crate::config::current().active_class);
        });

        if let Err(e) =
            control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::warn!("Failed to bind collapsible: {:?}", e);
            continue;
        }
        on_click.forget();

        if let Err(e) = control.set_attribute(BOUND_ATTR, "") {
            log::warn!("Failed to mark collapsible as bound: {:?}", e);
        }
        bound += 1;
    }

    bound
}
