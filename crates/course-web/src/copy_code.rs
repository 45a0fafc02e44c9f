//! Click-to-copy for rendered code listings.
//!
//! Binds once at hydration: every `pre.source-code` block present in the
//! document gets a click handler that copies the block's text to the system
//! clipboard and flashes a `copied` class for two seconds. Blocks inserted
//! after the initial bind (e.g. by client-side navigation) stay unbound;
//! the scan runs once and is never repeated.

/// Selector for the blocks rendered by `components::CodeBlock`.
pub const CODE_BLOCK_SELECTOR: &str = "pre.source-code";

/// Class that drives the transient "copied" flash (styled in style/main.css).
pub const COPIED_CLASS: &str = "copied";

/// How long the `copied` class stays on a block after a successful write.
pub const COPIED_RESET_MS: u32 = 2000;

const FAILURE_MESSAGE: &str = "Error in copying text:";

/// Why a clipboard write failed, decoupled from how it is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub message: &'static str,
    pub cause: Option<String>,
}

impl CopyFailure {
    pub fn new(cause: Option<String>) -> Self {
        Self {
            message: FAILURE_MESSAGE,
            cause,
        }
    }

    /// Text for the user-facing notification: fixed message, then detail.
    pub fn alert_text(&self) -> String {
        match &self.cause {
            Some(cause) => format!("{} {}", self.message, cause),
            None => self.message.to_string(),
        }
    }
}

#[cfg(feature = "hydrate")]
mod hydrate {
    use super::{CODE_BLOCK_SELECTOR, COPIED_CLASS, COPIED_RESET_MS, CopyFailure};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::JsValue;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{Document, Element};

    /// Register a click-to-copy handler on every code block under `document`.
    ///
    /// Called once from the hydrate entry point, after the server-rendered
    /// DOM is in place. Returns how many blocks were bound. Handlers stay
    /// registered for the lifetime of the page; there is no re-scan.
    pub fn bind_code_blocks(document: &Document) -> usize {
        let Ok(blocks) = document.query_selector_all(CODE_BLOCK_SELECTOR) else {
            return 0;
        };

        let mut bound = 0;
        for i in 0..blocks.length() {
            let Some(block) = blocks.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if bind_one(&block) {
                bound += 1;
            }
        }
        bound
    }

    fn bind_one(block: &Element) -> bool {
        let target = block.clone();
        let handler = Closure::wrap(Box::new(move || {
            // Read the text at click time; each click runs its own copy task.
            let text = target.text_content().unwrap_or_default();
            let block = target.clone();
            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => flash_copied(&block).await,
                    Err(err) => report_failure(&CopyFailure::new(failure_cause(&err))),
                }
            });
        }) as Box<dyn FnMut()>);

        let ok = block
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_ok();

        // Handlers are never unbound, so let the closure live forever.
        handler.forget();
        ok
    }

    /// Write `text` to the system clipboard via the async Clipboard API.
    async fn write_clipboard(text: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text)).await.map(|_| ())
    }

    /// Flash the `copied` class, clearing it after the fixed delay.
    ///
    /// Each successful copy schedules its own removal; clearing an absent
    /// class is a no-op, so overlapping clicks need no coordination.
    async fn flash_copied(block: &Element) {
        let classes = block.class_list();
        classes.add_1(COPIED_CLASS).ok();
        TimeoutFuture::new(COPIED_RESET_MS).await;
        classes.remove_1(COPIED_CLASS).ok();
    }

    fn failure_cause(err: &JsValue) -> Option<String> {
        err.dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
    }

    fn report_failure(failure: &CopyFailure) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(&failure.alert_text()).ok();
        }
    }
}

#[cfg(feature = "hydrate")]
pub use hydrate::bind_code_blocks;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_includes_the_cause() {
        let failure = CopyFailure::new(Some("NotAllowedError: permission denied".into()));
        assert_eq!(
            failure.alert_text(),
            "Error in copying text: NotAllowedError: permission denied"
        );
    }

    #[test]
    fn alert_text_without_cause_is_just_the_message() {
        assert_eq!(CopyFailure::new(None).alert_text(), "Error in copying text:");
    }
}
