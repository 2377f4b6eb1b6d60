use dioxus::prelude::*;
use domain::PortalConfig;

/// Get the page configuration.
pub fn use_portal_config() -> Signal<PortalConfig> {
    use_context::<Signal<PortalConfig>>()
}

/// Provides [`PortalConfig`] to the tree.
///
/// Starts from the built-in defaults and swaps in the server's `portal.toml`
/// once it arrives; a failed fetch keeps the defaults.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut config = use_signal(PortalConfig::default);

    let _ = use_resource(move || async move {
        match api::get_portal_config().await {
            Ok(loaded) => config.set(loaded),
            Err(e) => tracing::warn!("Using default portal config: {}", e),
        }
    });

    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
