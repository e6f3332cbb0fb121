/// Page configuration: element ids, selectors, endpoint and dialog text
///
/// Defaults match the markup rendered for the landing and report pages, so a
/// page only calls `configurePage` when it deviates from them.
use std::cell::RefCell;

use serde::Deserialize;

pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this site?";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to delete site. Please try again.";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub collapsible_class: String,
    pub active_class: String,
    pub search_input_id: String,
    pub list_id: String,
    pub item_selector: String,
    pub delete_endpoint: String,
    pub confirm_message: String,
    pub failure_message: String,
    /// Abort the delete request after this many milliseconds. `None` waits forever.
    pub delete_timeout_ms: Option<u32>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            collapsible_class: "collapsible".to_string(),
            active_class: "active".to_string(),
            search_input_id: "searchInput".to_string(),
            list_id: "rootDomainList".to_string(),
            item_selector: "li, .domain-list-item".to_string(),
            delete_endpoint: "/delete-site".to_string(),
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            delete_timeout_ms: None,
        }
    }
}

impl PageConfig {
    /// Reject configs that would make every handler a silent no-op
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("collapsibleClass", &self.collapsible_class),
            ("searchInputId", &self.search_input_id),
            ("listId", &self.list_id),
            ("itemSelector", &self.item_selector),
            ("deleteEndpoint", &self.delete_endpoint),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("{} must not be empty", name));
        }

        if self.delete_timeout_ms == Some(0) {
            return Err("deleteTimeoutMs must be greater than zero".to_string());
        }

        Ok(())
    }
}

thread_local! {
    static CURRENT: RefCell<PageConfig> = RefCell::new(PageConfig::default());
}

/// Snapshot of the active config
pub fn current() -> PageConfig {
    CURRENT.with(|config| config.borrow().clone())
}

/// Replace the active config after validating it
pub fn install(config: PageConfig) -> Result<(), String> {
    config.validate()?;
    CURRENT.with(|current| *current.borrow_mut() = config);
    Ok(())
}
