use reqwest::Method;
use serde_json::json;
use store::{ProfileForm, User};

use crate::responses::{Ack, AuthSession, UploadedImage, UserEnvelope};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let request = self
            .request(Method::POST, "/api/user/login")
            .json(&json!({ "email": email, "password": password }));
        self.send(request).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let request = self
            .request(Method::POST, "/api/user/register")
            .json(&json!({ "name": name, "email": email, "password": password }));
        self.send(request).await
    }

    /// The signed-in user. An expired token comes back as
    /// [`ApiError::Unauthorized`].
    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .send(self.authed(Method::GET, "/api/user/profile")?)
            .await?;
        Ok(envelope.user)
    }

    pub async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError> {
        let request = self.authed(Method::PUT, "/api/user/profile")?.json(form);
        let envelope: UserEnvelope = self.send(request).await?;
        Ok(envelope.user)
    }

    /// Upload a `data:` URL and get back the hosted picture URL.
    pub async fn upload_profile_pic(&self, data_url: &str) -> Result<String, ApiError> {
        let request = self
            .authed(Method::POST, "/api/user/upload-profile-pic")?
            .json(&json!({ "image": data_url }));
        let uploaded: UploadedImage = self.send(request).await?;
        Ok(uploaded.url)
    }

    /// `reset_token` comes from the emailed link, not from the session.
    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> Result<Ack, ApiError> {
        let request = self
            .request(Method::POST, "/api/user/reset-password")
            .json(&json!({ "token": reset_token, "newPassword": new_password }));
        self.send(request).await
    }
}
