//! Platform detection and the few measurements that differ per target.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Window width if it can be read synchronously at mount.
///
/// Only the browser can; native webviews report their width asynchronously
/// through the viewport listener.
#[cfg(target_arch = "wasm32")]
pub fn initial_viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initial_viewport_width() -> Option<f64> {
    None
}

/// Script installed once per app: reports `innerWidth` immediately and on
/// every resize through the eval channel.
pub const VIEWPORT_LISTENER_JS: &str = r#"
const report = () => dioxus.send(window.innerWidth);
window.addEventListener("resize", report);
report();
"#;
