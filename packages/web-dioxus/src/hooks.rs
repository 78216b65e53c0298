//! Hooks bridging Dioxus components to document-level DOM events

/// Listen for `event` on `document` for as long as the calling component is
/// mounted.
///
/// The listener is attached once, on first render, and detached when the
/// component's scope drops.
#[cfg(feature = "web")]
pub fn use_document_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    use dioxus::prelude::use_hook;
    use std::rc::Rc;

    use_hook(move || Rc::new(listener::DocumentListener::attach(event, handler)));
}

/// Warm the browser image cache for `src`
#[cfg(feature = "web")]
pub fn preload_image(src: &str) {
    match web_sys::HtmlImageElement::new() {
        Ok(image) => image.set_src(src),
        Err(e) => tracing::debug!(error = ?e, "Could not preload image"),
    }
}

#[cfg(not(feature = "web"))]
pub fn preload_image(_src: &str) {}

#[cfg(feature = "web")]
mod listener {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A document event listener that detaches itself on drop
    pub struct DocumentListener {
        event: &'static str,
        document: Option<web_sys::Document>,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DocumentListener {
        pub fn attach(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
            let document = web_sys::window().and_then(|window| window.document());

            if let Some(document) = &document {
                if let Err(e) = document
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                {
                    tracing::warn!(event, error = ?e, "Failed to attach document listener");
                }
            }

            Self {
                event,
                document,
                closure,
            }
        }
    }

    impl Drop for DocumentListener {
        fn drop(&mut self) {
            if let Some(document) = &self.document {
                let _ = document.remove_event_listener_with_callback(
                    self.event,
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
