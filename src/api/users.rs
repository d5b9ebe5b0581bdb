//! Login and user management

use reqwest::Method;

use recipe_core::{Authorization, NewUser};

use super::{send, ApiClient, ApiResult};

impl ApiClient {
    /// Exchange credentials for a token (form-urlencoded, OAuth2 password flow)
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Authorization> {
        let request = self
            .request(Method::POST, "token")
            .form(&[("username", username), ("password", password)]);
        Ok(send(request).await?.json().await?)
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
        send(self.authed(Method::POST, "user/create")?.json(user)).await?;
        Ok(())
    }
}
