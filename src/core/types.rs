use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
}

impl TimeUnit {
    /// Unrecognized unit names fall back to years rather than erroring.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "months" | "month" => TimeUnit::Months,
            "weeks" | "week" => TimeUnit::Weeks,
            "days" | "day" => TimeUnit::Days,
            _ => TimeUnit::Years,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum MarketSize {
    Small,
    Medium,
    Large,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum BusinessCategory {
    Technology,
    Retail,
    Service,
    Hospitality,
    Other,
}

/// How the base ROI rate is derived before market adjustment. `RangeDerived`
/// is the canonical mode; `FlatTable` reproduces the legacy lookup-table
/// behavior and feeds the same downstream steps.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoiMode {
    RangeDerived,
    FlatTable,
}

#[derive(Debug, Clone)]
pub struct InvestmentTerms {
    pub initial_investment: f64,
    pub additional_costs: f64,
    pub time_period: f64,
    pub time_unit: TimeUnit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub category: BusinessCategory,
    pub description: &'static str,
    pub recommended_investment_min: f64,
    pub recommended_investment_max: f64,
    pub typical_roi_min: f64,
    pub typical_roi_max: f64,
    pub risk_tier: RiskTier,
    pub market_size: MarketSize,
    pub competition: Level,
    pub scalability: Level,
    pub regulation: Level,
    pub time_to_profitability: &'static str,
    pub industry_multiplier: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniScenario {
    pub id: u32,
    pub scenario_id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended_investment_min: f64,
    pub recommended_investment_max: f64,
    pub typical_roi_min: f64,
    pub typical_roi_max: f64,
    pub risk_tier: RiskTier,
    pub flat_roi_rate: f64,
    pub revenue_model: &'static str,
    pub cost_structure: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTaxProfile {
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub corporate_tax_rate: f64,
    pub capital_gains_tax_rate: f64,
    pub dividend_tax_rate: f64,
    pub vat_rate: f64,
    pub social_security_rate: f64,
    pub currency: &'static str,
    pub gdp_per_capita: f64,
    pub ease_of_business_rank: u32,
    pub corruption_index: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationFactors {
    pub base_roi_rate: f64,
    pub market_factor: f64,
    pub volatility: f64,
    pub time_in_years: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub final_value: f64,
    pub net_profit: f64,
    pub roi_percentage: f64,
    pub annualized_roi: f64,
    pub total_investment: f64,
    pub tax_amount: f64,
    pub after_tax_profit: f64,
    pub after_tax_roi: f64,
    pub effective_tax_rate: f64,
    pub risk_score: f64,
    pub market_analysis: String,
    pub recommendations: Vec<String>,
    pub scenario_name: String,
    pub mini_scenario_name: String,
    pub country_name: String,
    pub factors: CalculationFactors,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub scenario_id: u32,
    pub investment_amount: f64,
    pub country_code: String,
    pub market_risk: f64,
    pub operational_risk: f64,
    pub financial_risk: f64,
    pub regulatory_risk: f64,
    pub competition_risk: f64,
    pub overall_risk_score: f64,
    pub risk_level: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_unit_parses_known_names_case_insensitively() {
        assert_eq!(TimeUnit::from_name("Months"), TimeUnit::Months);
        assert_eq!(TimeUnit::from_name("WEEKS"), TimeUnit::Weeks);
        assert_eq!(TimeUnit::from_name("day"), TimeUnit::Days);
        assert_eq!(TimeUnit::from_name("years"), TimeUnit::Years);
    }

    #[test]
    fn time_unit_defaults_unknown_names_to_years() {
        assert_eq!(TimeUnit::from_name("fortnights"), TimeUnit::Years);
        assert_eq!(TimeUnit::from_name(""), TimeUnit::Years);
    }

    #[test]
    fn calc_error_messages_name_the_kind() {
        let invalid = CalcError::InvalidInput("initial_investment must be > 0".to_string());
        assert!(invalid.to_string().starts_with("invalid input:"));
        let missing = CalcError::NotFound("country ZZ".to_string());
        assert!(missing.to_string().starts_with("not found:"));
    }
}
