//! App Services
//!
//! Session, navigation, theme and API configuration bundled into one value
//! that every page receives as a prop.

use crate::{
    api::ApiClient, config::ClientConfig, navigation::Navigator, session::Session,
    theme::ThemeState,
};

#[derive(Clone, Copy)]
pub struct AppServices {
    pub config: ClientConfig,
    pub session: Session,
    pub nav: Navigator,
    pub theme: ThemeState,
}

impl AppServices {
    /// Build from the browser's current URL and cookies
    pub fn init() -> Self {
        Self {
            config: ClientConfig::from_build_env(),
            session: Session::restore(),
            nav: Navigator::from_location(),
            theme: ThemeState::restore(),
        }
    }

    /// API client carrying the current login, if any
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config, self.session.token())
    }
}
