//! Sleeping on native and wasm targets

use std::time::Duration;

/// Suspend the current task for `duration`
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration`
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Run `f` once `delay` has elapsed.
///
/// The delay is a floor on how long the surrounding operation stays visible;
/// it does not wait on anything else.
pub async fn after_delay<T>(delay: Duration, f: impl FnOnce() -> T) -> T {
    sleep(delay).await;
    f()
}
