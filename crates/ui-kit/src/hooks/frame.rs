use dioxus::prelude::*;

/// Milliseconds on a monotonic-enough wall clock, shared by every animation.
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1000.0
}

/// Wait for the next animation frame.
///
/// Returns `false` when no renderer can schedule frames (server rendering),
/// which tells frame loops to stop instead of spinning.
pub async fn next_frame() -> bool {
    document::eval("await new Promise(r => requestAnimationFrame(r)); return 0;")
        .join::<u8>()
        .await
        .is_ok()
}
