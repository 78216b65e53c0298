//! Loading indicators

use std::time::Duration;

use dioxus::prelude::*;
use partner_core::config::LOGOUT_DELAY;

/// Inline style that runs the fill animation for `delay`
fn fill_style(delay: Duration) -> String {
    format!("animation-duration: {}ms", delay.as_millis())
}

/// Determinate progress bar pinned to the top of the viewport.
///
/// The fill animation lasts as long as the logout delay.
#[component]
pub fn LogoutProgress() -> Element {
    let style = fill_style(LOGOUT_DELAY);

    rsx! {
        div {
            class: "fixed top-0 left-0 w-full h-1 bg-gray-300 z-[999]",
            role: "progressbar",
            div { class: "h-full bg-orange-600 animate-progress", style: "{style}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_lasts_as_long_as_logout_delay() {
        assert_eq!(fill_style(LOGOUT_DELAY), "animation-duration: 1500ms");
        assert_eq!(fill_style(Duration::from_millis(250)), "animation-duration: 250ms");
    }
}
