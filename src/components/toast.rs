//! Transient toast notification.

use leptos::prelude::*;

use crate::state::toast::ToastMessage;

/// Fixed-position message in the bottom-right corner.
#[component]
pub fn Toast(message: ToastMessage) -> impl IntoView {
    let style = message.style();
    view! {
        <div class="toast" role="status" aria-live="polite" style=style>
            {message.text}
        </div>
    }
}

/// Mount a [`Toast`] on `<body>` and unmount it after `duration_ms`.
///
/// The removal timer is not cancellable; unmounting a node that something
/// else already removed is harmless.
#[cfg(feature = "hydrate")]
pub fn show_toast(message: ToastMessage, duration_ms: u32) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        leptos::logging::warn!("no document body, toast dropped: {}", message.text);
        return;
    };
    let handle = leptos::mount::mount_to(body, move || view! { <Toast message=message/> });
    gloo_timers::callback::Timeout::new(duration_ms, move || drop(handle)).forget();
}
