use super::{
    client::{parse_json, rejection, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post_json("/auth/login", &request).await?;
        if response.status().is_success() {
            parse_json(response).await
        } else {
            Err(rejection(response).await)
        }
    }

    /// The auth service answers 201 with a plain-text body, which is ignored.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        let response = self.post_json("/auth/register", &request).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}
