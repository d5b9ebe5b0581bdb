use leptos::prelude::*;

/// Dismissible error line above a form
#[component]
pub fn AlertBox(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="alert" role="alert">
                    <span>{text}</span>
                    <button type="button" class="alert-close" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
