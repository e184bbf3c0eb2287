use async_trait::async_trait;

use urbanroof_core::errors::Result;
use urbanroof_core::users::{
    AdminLoginRequest, AdminLoginResponse, LoginRequest, LoginResponse, RegisterRequest, User,
};

use super::AuthApi;
use crate::client::UrbanRoofClient;

#[async_trait]
impl AuthApi for UrbanRoofClient {
    async fn register(&self, request: &RegisterRequest) -> Result<User> {
        self.post("/v1/users/register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post("/v1/users/login", request).await
    }

    async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse> {
        self.post("/admin/login", request).await
    }
}
