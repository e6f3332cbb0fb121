/// Browser-backed implementations of the delete flow's host and transport
use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Document, RequestInit, Response, Window};

use crate::deleter::{DeleteEndpoint, SiteHost};
use crate::error::PageError;
use crate::ui::domain_list;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingDocument)
}

/// Dialogs via `window.confirm`/`window.alert`, removal via the live document
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, PageError> {
        let window = window()?;
        let document = window.document().ok_or(PageError::MissingDocument)?;
        Ok(BrowserHost { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl SiteHost for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        // A page that blocks dialogs makes confirm throw; treat that as "no"
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("confirm() failed: {:?}", e);
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }

    fn remove_entry(&self, element_id: &str) -> bool {
        domain_list::remove_entry(&self.document, element_id)
    }
}

/// `fetch`-based transport, optionally aborted after a timeout
pub struct FetchEndpoint {
    window: Window,
    timeout_ms: Option<u32>,
}

impl FetchEndpoint {
    pub fn new(window: Window, timeout_ms: Option<u32>) -> Self {
        FetchEndpoint { window, timeout_ms }
    }
}

impl DeleteEndpoint for FetchEndpoint {
    async fn post(&self, url: &str) -> Result<u16, PageError> {
        let init = RequestInit::new();
        init.set_method("POST");

        let timer = match self.timeout_ms {
            Some(ms) => Some(AbortTimer::arm(&self.window, &init, ms)?),
            None => None,
        };

        let result = JsFuture::from(self.window.fetch_with_str_and_init(url, &init)).await;
        let timed_out = timer.as_ref().and_then(AbortTimer::fired_after);
        drop(timer);

        match result {
            Ok(value) => {
                let response: Response = value.dyn_into().map_err(PageError::from_js)?;
                Ok(response.status())
            }
            Err(e) => match timed_out {
                Some(ms) => Err(PageError::Timeout(ms)),
                None => Err(PageError::from_js(e)),
            },
        }
    }
}

/// Aborts an in-flight fetch when the timer fires; clears the timer on drop
struct AbortTimer {
    window: Window,
    handle: i32,
    ms: u32,
    fired: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut()>,
}

impl AbortTimer {
    fn arm(window: &Window, init: &RequestInit, ms: u32) -> Result<Self, PageError> {
        let controller = AbortController::new().map_err(PageError::from_js)?;
        init.set_signal(Some(&controller.signal()));

        let fired = Rc::new(Cell::new(false));
        let callback = {
            let fired = fired.clone();
            Closure::<dyn FnMut()>::new(move || {
                fired.set(true);
                controller.abort();
            })
        };

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(ms).unwrap_or(i32::MAX),
            )
            .map_err(PageError::from_js)?;

        Ok(AbortTimer {
            window: window.clone(),
            handle,
            ms,
            fired,
            _callback: callback,
        })
    }

    fn fired_after(&self) -> Option<u32> {
        self.fired.get().then_some(self.ms)
    }
}

impl Drop for AbortTimer {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}
