//! Traits defining the contract for each Urban Roof service.
//!
//! `UrbanRoofClient` implements all of them over HTTP; flows and the session
//! manager depend on the traits so they can run against in-memory fakes.

use async_trait::async_trait;
use rust_decimal::Decimal;

use urbanroof_core::admin::DashboardMetrics;
use urbanroof_core::agencies::{Agency, AgencyUpdate, NewAgency};
use urbanroof_core::errors::Result;
use urbanroof_core::holdings::Holding;
use urbanroof_core::investments::{InvestmentQuery, NewInvestment, UserInvestment};
use urbanroof_core::properties::{NewProperty, Property, PropertyUpdate};
use urbanroof_core::users::{
    AdminLoginRequest, AdminLoginResponse, LoginRequest, LoginResponse, RegisterRequest, User,
};
use urbanroof_core::wallets::Wallet;

/// Registration and sign-in
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<User>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Dedicated admin sign-in endpoint.
    async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AdminLoginResponse>;
}

#[async_trait]
pub trait PropertyApi: Send + Sync {
    async fn get_all_properties(&self) -> Result<Vec<Property>>;

    async fn get_property_by_id(&self, id: &str) -> Result<Property>;

    async fn add_property(&self, property: &NewProperty) -> Result<Property>;

    async fn update_property(&self, id: &str, update: &PropertyUpdate) -> Result<Property>;

    async fn delete_property(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait InvestmentApi: Send + Sync {
    async fn add_investment(&self, investment: &NewInvestment) -> Result<UserInvestment>;

    async fn get_user_investments(&self, user_id: &str) -> Result<Vec<UserInvestment>>;

    /// Holdings as computed by the backend.
    async fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;

    async fn update_investment_amount(&self, id: &str, amount: Decimal) -> Result<UserInvestment>;

    async fn delete_investment(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn get_wallet_by_id(&self, id: &str) -> Result<Wallet>;

    async fn deposit_funds(&self, user_id: &str, amount: Decimal) -> Result<Wallet>;

    async fn withdraw_funds(&self, user_id: &str, amount: Decimal) -> Result<Wallet>;
}

#[async_trait]
pub trait AgencyApi: Send + Sync {
    async fn create_agency(&self, agency: &NewAgency) -> Result<Agency>;

    async fn get_agency_by_id(&self, id: &str) -> Result<Agency>;

    async fn update_agency(&self, id: &str, update: &AgencyUpdate) -> Result<Agency>;

    async fn delete_agency(&self, id: &str) -> Result<bool>;

    async fn withdraw_from_agency_wallet(&self, id: &str, amount: Decimal) -> Result<bool>;

    async fn list_agency_properties(&self, id: &str) -> Result<Vec<Property>>;
}

/// Admin console endpoints. Calls need an admin session token.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_dashboard_metrics(&self) -> Result<DashboardMetrics>;

    async fn get_all_agencies(&self) -> Result<Vec<Agency>>;

    async fn delete_agency(&self, id: &str) -> Result<bool>;

    async fn get_all_properties(&self) -> Result<Vec<Property>>;

    async fn delete_property(&self, id: &str) -> Result<bool>;

    async fn get_investments(&self, query: &InvestmentQuery) -> Result<Vec<UserInvestment>>;
}
