mod catalog;
mod engine;
mod types;

pub use catalog::{
    countries, country_by_code, first_mini_for, mini_scenario_for, mini_scenarios,
    mini_scenarios_for, scenario_by_id, scenarios,
};
pub use engine::{assess_risk, calculate, Volatility};
pub use types::{
    BusinessCategory, CalcError, CalculationFactors, CalculationResult, CountryTaxProfile,
    InvestmentTerms, Level, MarketSize, MiniScenario, RiskAssessment, RiskTier, RoiMode,
    ScenarioDescriptor, TimeUnit,
};
