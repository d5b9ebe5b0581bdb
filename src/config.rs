//! Client Configuration
//!
//! Fixed at build time: `FAST_KITCHEN_API_BASE=http://localhost:8000/ trunk build`.

use recipe_core::{ImageId, DEFAULT_API_BASE, SITE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    api_base: &'static str,
    pub site_name: &'static str,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FAST_KITCHEN_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn new(api_base: &'static str) -> Self {
        Self { api_base, site_name: SITE_NAME }
    }

    /// Absolute URL of an API path such as `recipe/filtered`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn image_url(&self, image: ImageId) -> String {
        self.api_url(&format!("image/{image}"))
    }

    /// Browser tab title for a page
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{} - {page}", self.site_name),
            None => self.site_name.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_single_slash() {
        let with_slash = ClientConfig::new("http://localhost:8000/");
        let without = ClientConfig::new("http://localhost:8000");

        assert_eq!(with_slash.api_url("recipe/filtered"), "http://localhost:8000/recipe/filtered");
        assert_eq!(without.api_url("/token"), "http://localhost:8000/token");
    }

    #[test]
    fn test_image_url() {
        let config = ClientConfig::new(DEFAULT_API_BASE);
        assert_eq!(config.image_url(ImageId(5)), "https://api.flottekueche.de/image/5");
    }

    #[test]
    fn test_page_title() {
        let config = ClientConfig::new(DEFAULT_API_BASE);
        assert_eq!(config.page_title(Some("Pizza Recipe")), "FastKitchen - Pizza Recipe");
        assert_eq!(config.page_title(None), "FastKitchen");
    }
}
