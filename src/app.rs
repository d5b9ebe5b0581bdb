//! FastKitchen App
//!
//! Root component: picks the page for the current route and applies the
//! theme. Routes needing a login (or admin rights) redirect when the
//! session lacks them.

use leptos::prelude::*;
use recipe_core::Route;

use crate::pages::{EditorPage, HomePage, LegalNoticePage, LoginPage, RecipePage, RegisterPage};
use crate::services::AppServices;

#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::init();
    let nav = services.nav;
    let session = services.session;
    nav.listen();

    web_sys::console::log_1(&format!("[APP] Starting at {}", nav.route()).into());

    // Redirect from guarded routes; re-runs on route or login changes
    Effect::new(move |_| {
        let route = nav.route();
        let allowed = route.guard(session.is_logged_in(), session.is_admin());
        if allowed != route {
            web_sys::console::log_1(&format!("[APP] Redirecting {route} -> {allowed}").into());
            nav.replace(allowed);
        }
    });

    let page = move || {
        let route = nav.route();
        // Pages rebuild on route changes only
        let allowed = untrack(|| route.guard(session.is_logged_in(), session.is_admin()));
        if allowed != route {
            return ().into_any();
        }
        match route {
            Route::Home | Route::NotFound => view! { <HomePage services=services/> }.into_any(),
            Route::Recipe(id) => view! { <RecipePage services=services id=id/> }.into_any(),
            Route::Create => view! { <EditorPage services=services id=None/> }.into_any(),
            Route::Edit(id) => view! { <EditorPage services=services id=Some(id)/> }.into_any(),
            Route::Login => view! { <LoginPage services=services/> }.into_any(),
            Route::Register => view! { <RegisterPage services=services/> }.into_any(),
            Route::LegalNotice => view! { <LegalNoticePage services=services/> }.into_any(),
        }
    };

    view! {
        <div class=move || format!("app theme-{}", services.theme.get().as_str())>
            {page}
        </div>
    }
}
