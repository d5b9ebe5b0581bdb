use leptos::prelude::*;
use recipe_core::Route;

use crate::components::NavLink;
use crate::services::AppServices;

#[component]
pub fn Footer(services: AppServices) -> impl IntoView {
    let session = services.session;
    let nav = services.nav;

    let log_out = move |_| {
        session.log_out();
        nav.push(Route::Home);
    };

    view! {
        <footer class="site-footer">
            <Show
                when=move || session.is_logged_in()
                fallback=move || view! { <NavLink nav=nav to=Route::Login>"Log in"</NavLink> }
            >
                <NavLink nav=nav to=Route::Create>"Create recipe"</NavLink>
                <Show when=move || session.is_admin()>
                    <NavLink nav=nav to=Route::Register>"Create user"</NavLink>
                </Show>
                <button class="link-button" on:click=log_out>"Log out"</button>
            </Show>
            <NavLink nav=nav to=Route::LegalNotice>"Legal notice"</NavLink>
        </footer>
    }
}
