use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::Route;

use crate::api::ApiError;
use crate::components::{AlertBox, Footer, Header};
use crate::navigation::set_document_title;
use crate::services::AppServices;
use crate::session::AuthState;

/// Alert text for a failed login
fn login_failure(error: &ApiError) -> String {
    match error {
        ApiError::Status { status, detail } if *status < 500 => format!("Login failed: {detail}"),
        _ => "Login failed, please try again later.".to_string(),
    }
}

#[component]
pub fn LoginPage(services: AppServices) -> impl IntoView {
    set_document_title(&services.config.page_title(Some("Login")));

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (alert, set_alert) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let api = services.api();
        set_pending.set(true);

        spawn_local(async move {
            match api.login(&user, &pass).await {
                Ok(auth) => {
                    web_sys::console::log_1(&format!("[LOGIN] Logged in as user {}", auth.user_id).into());
                    services.session.log_in(AuthState::from_authorization(&auth));
                    services.nav.push(Route::Home);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[LOGIN] Login failed: {e}").into());
                    set_alert.set(Some(login_failure(&e)));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="page login-page">
            <Header services=services/>
            <main class="content">
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Log in"</h2>
                    <AlertBox message=alert on_dismiss=move |()| set_alert.set(None)/>
                    <input
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || pending.get()>"Log in"</button>
                </form>
            </main>
            <Footer services=services/>
        </div>
    }
}
