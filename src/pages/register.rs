use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::NewUser;

use crate::components::{AlertBox, Footer, Header};
use crate::navigation::set_document_title;
use crate::services::AppServices;

/// Admin-only form for creating users
#[component]
pub fn RegisterPage(services: AppServices) -> impl IntoView {
    set_document_title(&services.config.page_title(Some("Create user")));

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_admin, set_is_admin) = signal(false);
    let (alert, set_alert) = signal(None::<String>);
    let (success, set_success) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_success.set(false);
        let user = NewUser {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            is_admin: is_admin.get_untracked(),
        };
        if user.username.is_empty() || user.password.is_empty() {
            set_alert.set(Some("Please enter a username and a password".to_string()));
            return;
        }
        let api = services.api();

        spawn_local(async move {
            match api.create_user(&user).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[REGISTER] Created user {}", user.username).into());
                    set_alert.set(None);
                    set_success.set(true);
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_is_admin.set(false);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[REGISTER] User creation failed: {e}").into());
                    set_alert.set(Some(format!("User creation failed: {e}")));
                }
            }
        });
    };

    view! {
        <div class="page register-page">
            <Header services=services/>
            <main class="content">
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Create user"</h2>
                    <AlertBox message=alert on_dismiss=move |()| set_alert.set(None)/>
                    <Show when=move || success.get()>
                        <p class="success">"User created successfully"</p>
                    </Show>
                    <input
                        type="text"
                        placeholder="Username"
                        autocomplete="off"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_admin.get()
                            on:change=move |ev| set_is_admin.set(event_target_checked(&ev))
                        />
                        "Administrator"
                    </label>
                    <button type="submit">"Create user"</button>
                </form>
            </main>
            <Footer services=services/>
        </div>
    }
}
