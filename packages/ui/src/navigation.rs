/// Leave the app with a full browser navigation.
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("External navigation is only available in the browser: {}", url);
    }
}
