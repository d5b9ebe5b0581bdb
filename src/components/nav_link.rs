use leptos::prelude::*;
use recipe_core::Route;

use crate::navigation::Navigator;

/// Anchor that navigates in-app on a plain left click and keeps the real
/// href for new-tab/copy-link
#[component]
pub fn NavLink(
    nav: Navigator,
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key()) {
                    ev.prevent_default();
                    nav.push(to);
                }
            }
        >
            {children()}
        </a>
    }
}
