use leptos::prelude::*;

use crate::components::{Footer, Header};
use crate::navigation::set_document_title;
use crate::services::AppServices;

#[component]
pub fn LegalNoticePage(services: AppServices) -> impl IntoView {
    set_document_title(&services.config.page_title(Some("Legal notice")));

    view! {
        <div class="page legal-page">
            <Header services=services/>
            <main class="content legal-notice">
                <h2>"Legal notice"</h2>
                <p>
                    {services.config.site_name}
                    " is a private, non-commercial recipe collection. Recipes and images are "
                    "provided by their creators, who are responsible for their content."
                </p>
                <h3>"Privacy"</h3>
                <p>
                    "This site stores your login token and your theme preference in cookies. "
                    "No tracking or analytics cookies are used."
                </p>
            </main>
            <Footer services=services/>
        </div>
    }
}
