/// Error type shared by the page controller
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("request aborted after {0} ms")]
    Timeout(u32),

    #[error("invalid page config: {0}")]
    InvalidConfig(String),
}

impl PageError {
    /// Wrap a rejected JS call, keeping its debug rendering for the log
    pub fn from_js(value: JsValue) -> Self {
        PageError::Transport(format!("{:?}", value))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
