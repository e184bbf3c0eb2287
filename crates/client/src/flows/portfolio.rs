use futures::future::try_join_all;
use log::debug;

use urbanroof_core::errors::Result;
use urbanroof_core::holdings::{
    compute_holdings, summarize_portfolio, InvestmentRecord, PortfolioSummary, PropertyTotals,
};

use crate::api::{InvestmentApi, PropertyApi};

/// Holdings screen data for one user.
pub struct PortfolioView<'a, I: ?Sized, P: ?Sized> {
    investments: &'a I,
    properties: &'a P,
}

impl<'a, I, P> PortfolioView<'a, I, P>
where
    I: InvestmentApi + ?Sized,
    P: PropertyApi + ?Sized,
{
    pub fn new(investments: &'a I, properties: &'a P) -> Self {
        Self {
            investments,
            properties,
        }
    }

    /// Summary built from the holdings the backend computes.
    pub async fn load(&self, user_id: &str) -> Result<PortfolioSummary> {
        let holdings = self.investments.get_holdings(user_id).await?;
        debug!("Loaded {} holdings for user {}", holdings.len(), user_id);
        Ok(summarize_portfolio(holdings))
    }

    /// Summary computed locally from the user's investments and the current
    /// property totals.
    pub async fn derive(&self, user_id: &str) -> Result<PortfolioSummary> {
        let investments = self.investments.get_user_investments(user_id).await?;
        let records: Vec<InvestmentRecord> = investments.iter().map(InvestmentRecord::from).collect();

        let mut property_ids: Vec<&str> = Vec::new();
        for record in &records {
            if !property_ids.contains(&record.property_id.as_str()) {
                property_ids.push(&record.property_id);
            }
        }

        let properties = try_join_all(
            property_ids
                .iter()
                .map(|id| self.properties.get_property_by_id(id)),
        )
        .await?;
        let totals: Vec<PropertyTotals> = properties.iter().map(|p| p.totals()).collect();

        Ok(summarize_portfolio(compute_holdings(&records, &totals)))
    }
}
