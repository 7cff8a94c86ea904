use std::sync::OnceLock;

use super::types::{
    BusinessCategory, CalcError, CountryTaxProfile, Level, MarketSize, MiniScenario, RiskTier,
    ScenarioDescriptor,
};

pub fn scenarios() -> &'static [ScenarioDescriptor] {
    static SCENARIOS: OnceLock<Vec<ScenarioDescriptor>> = OnceLock::new();
    SCENARIOS.get_or_init(build_scenarios)
}

pub fn mini_scenarios() -> &'static [MiniScenario] {
    static MINIS: OnceLock<Vec<MiniScenario>> = OnceLock::new();
    MINIS.get_or_init(build_mini_scenarios)
}

pub fn countries() -> &'static [CountryTaxProfile] {
    static COUNTRIES: OnceLock<Vec<CountryTaxProfile>> = OnceLock::new();
    COUNTRIES.get_or_init(build_countries)
}

pub fn scenario_by_id(id: u32) -> Result<&'static ScenarioDescriptor, CalcError> {
    scenarios()
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| CalcError::NotFound(format!("business scenario {id}")))
}

pub fn mini_scenarios_for(scenario_id: u32) -> Vec<&'static MiniScenario> {
    mini_scenarios()
        .iter()
        .filter(|m| m.scenario_id == scenario_id)
        .collect()
}

/// Resolves a mini-scenario and checks it belongs to the named parent.
pub fn mini_scenario_for(
    scenario_id: u32,
    mini_id: u32,
) -> Result<&'static MiniScenario, CalcError> {
    let mini = mini_scenarios()
        .iter()
        .find(|m| m.id == mini_id)
        .ok_or_else(|| CalcError::NotFound(format!("mini scenario {mini_id}")))?;
    if mini.scenario_id != scenario_id {
        return Err(CalcError::NotFound(format!(
            "mini scenario {mini_id} under business scenario {scenario_id}"
        )));
    }
    Ok(mini)
}

pub fn first_mini_for(scenario_id: u32) -> Result<&'static MiniScenario, CalcError> {
    mini_scenarios()
        .iter()
        .find(|m| m.scenario_id == scenario_id)
        .ok_or_else(|| {
            CalcError::NotFound(format!("mini scenarios for business scenario {scenario_id}"))
        })
}

/// Exact-match lookup after uppercasing; unknown codes are rejected, never
/// silently defaulted.
pub fn country_by_code(code: &str) -> Result<&'static CountryTaxProfile, CalcError> {
    let code = code.trim().to_ascii_uppercase();
    countries()
        .iter()
        .find(|c| c.country_code == code)
        .ok_or_else(|| CalcError::NotFound(format!("country {code}")))
}

fn build_scenarios() -> Vec<ScenarioDescriptor> {
    vec![
        ScenarioDescriptor {
            id: 1,
            name: "E-commerce",
            category: BusinessCategory::Retail,
            description: "Online retail business selling products directly to consumers",
            recommended_investment_min: 5_000.0,
            recommended_investment_max: 100_000.0,
            typical_roi_min: 15.0,
            typical_roi_max: 35.0,
            risk_tier: RiskTier::Medium,
            market_size: MarketSize::Large,
            competition: Level::High,
            scalability: Level::High,
            regulation: Level::Medium,
            time_to_profitability: "6-12 months",
            industry_multiplier: 1.2,
        },
        ScenarioDescriptor {
            id: 2,
            name: "SaaS",
            category: BusinessCategory::Technology,
            description: "Software as a Service business model",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 500_000.0,
            typical_roi_min: 25.0,
            typical_roi_max: 60.0,
            risk_tier: RiskTier::High,
            market_size: MarketSize::Large,
            competition: Level::High,
            scalability: Level::High,
            regulation: Level::Low,
            time_to_profitability: "1-2 years",
            industry_multiplier: 1.3,
        },
        ScenarioDescriptor {
            id: 3,
            name: "Freelancer",
            category: BusinessCategory::Service,
            description: "Independent professional services",
            recommended_investment_min: 500.0,
            recommended_investment_max: 10_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 80.0,
            risk_tier: RiskTier::Low,
            market_size: MarketSize::Medium,
            competition: Level::High,
            scalability: Level::Low,
            regulation: Level::Low,
            time_to_profitability: "0-6 months",
            industry_multiplier: 1.1,
        },
        ScenarioDescriptor {
            id: 4,
            name: "Agency",
            category: BusinessCategory::Service,
            description: "Marketing, design, or consulting agency",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 100_000.0,
            typical_roi_min: 18.0,
            typical_roi_max: 45.0,
            risk_tier: RiskTier::Medium,
            market_size: MarketSize::Large,
            competition: Level::High,
            scalability: Level::Medium,
            regulation: Level::Low,
            time_to_profitability: "6-12 months",
            industry_multiplier: 1.15,
        },
        ScenarioDescriptor {
            id: 5,
            name: "Restaurant",
            category: BusinessCategory::Hospitality,
            description: "Food service establishment",
            recommended_investment_min: 50_000.0,
            recommended_investment_max: 500_000.0,
            typical_roi_min: 8.0,
            typical_roi_max: 25.0,
            risk_tier: RiskTier::High,
            market_size: MarketSize::Large,
            competition: Level::High,
            scalability: Level::Low,
            regulation: Level::High,
            time_to_profitability: "1-2 years",
            industry_multiplier: 0.95,
        },
    ]
}

fn build_mini_scenarios() -> Vec<MiniScenario> {
    vec![
        MiniScenario {
            id: 1,
            scenario_id: 1,
            name: "Dropshipping",
            description: "Low-investment e-commerce model with supplier fulfillment",
            recommended_investment_min: 1_000.0,
            recommended_investment_max: 10_000.0,
            typical_roi_min: 10.0,
            typical_roi_max: 30.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 25.0,
            revenue_model: "Product sales with supplier fulfillment",
            cost_structure: "Marketing, platform fees, customer service",
        },
        MiniScenario {
            id: 2,
            scenario_id: 1,
            name: "Amazon FBA",
            description: "Marketplace retail with fulfillment by Amazon",
            recommended_investment_min: 5_000.0,
            recommended_investment_max: 50_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 45.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 30.0,
            revenue_model: "Marketplace product sales",
            cost_structure: "Inventory, marketplace fees, advertising",
        },
        MiniScenario {
            id: 3,
            scenario_id: 1,
            name: "Shopify Store",
            description: "Self-hosted storefront on a commerce platform",
            recommended_investment_min: 2_000.0,
            recommended_investment_max: 30_000.0,
            typical_roi_min: 15.0,
            typical_roi_max: 35.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 22.0,
            revenue_model: "Direct-to-consumer product sales",
            cost_structure: "Platform fees, inventory, marketing",
        },
        MiniScenario {
            id: 4,
            scenario_id: 1,
            name: "Digital Products",
            description: "Downloadable goods with near-zero marginal cost",
            recommended_investment_min: 500.0,
            recommended_investment_max: 15_000.0,
            typical_roi_min: 30.0,
            typical_roi_max: 60.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 40.0,
            revenue_model: "One-off digital sales",
            cost_structure: "Content production, marketing, platform fees",
        },
        MiniScenario {
            id: 5,
            scenario_id: 1,
            name: "Private Label",
            description: "Branded products manufactured by third parties",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 100_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 40.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 20.0,
            revenue_model: "Branded product sales",
            cost_structure: "Manufacturing, inventory, marketing, logistics",
        },
        MiniScenario {
            id: 6,
            scenario_id: 2,
            name: "B2B SaaS",
            description: "Business-to-business software solutions",
            recommended_investment_min: 25_000.0,
            recommended_investment_max: 500_000.0,
            typical_roi_min: 30.0,
            typical_roi_max: 70.0,
            risk_tier: RiskTier::High,
            flat_roi_rate: 28.0,
            revenue_model: "Monthly/annual subscriptions",
            cost_structure: "Development, hosting, customer acquisition, support",
        },
        MiniScenario {
            id: 7,
            scenario_id: 2,
            name: "Mobile App",
            description: "Consumer mobile application with in-app monetization",
            recommended_investment_min: 15_000.0,
            recommended_investment_max: 200_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 60.0,
            risk_tier: RiskTier::High,
            flat_roi_rate: 35.0,
            revenue_model: "Subscriptions and in-app purchases",
            cost_structure: "Development, store fees, user acquisition",
        },
        MiniScenario {
            id: 8,
            scenario_id: 2,
            name: "API Service",
            description: "Developer-facing API sold by usage tier",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 150_000.0,
            typical_roi_min: 30.0,
            typical_roi_max: 65.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 40.0,
            revenue_model: "Metered usage subscriptions",
            cost_structure: "Development, hosting, documentation, support",
        },
        MiniScenario {
            id: 9,
            scenario_id: 2,
            name: "Developer Tools",
            description: "Tooling sold to software teams",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 250_000.0,
            typical_roi_min: 25.0,
            typical_roi_max: 55.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 30.0,
            revenue_model: "Seat-based subscriptions",
            cost_structure: "Development, hosting, developer relations",
        },
        MiniScenario {
            id: 10,
            scenario_id: 3,
            name: "Web Development",
            description: "Website and web application development",
            recommended_investment_min: 1_000.0,
            recommended_investment_max: 15_000.0,
            typical_roi_min: 25.0,
            typical_roi_max: 100.0,
            risk_tier: RiskTier::Low,
            flat_roi_rate: 45.0,
            revenue_model: "Project-based and hourly billing",
            cost_structure: "Tools, education, marketing, equipment",
        },
        MiniScenario {
            id: 11,
            scenario_id: 3,
            name: "Graphic Design",
            description: "Design services for brands and marketing",
            recommended_investment_min: 500.0,
            recommended_investment_max: 8_000.0,
            typical_roi_min: 25.0,
            typical_roi_max: 80.0,
            risk_tier: RiskTier::Low,
            flat_roi_rate: 40.0,
            revenue_model: "Project-based billing",
            cost_structure: "Software licenses, hardware, marketing",
        },
        MiniScenario {
            id: 12,
            scenario_id: 3,
            name: "Content Writing",
            description: "Editorial and marketing copy services",
            recommended_investment_min: 200.0,
            recommended_investment_max: 5_000.0,
            typical_roi_min: 30.0,
            typical_roi_max: 90.0,
            risk_tier: RiskTier::Low,
            flat_roi_rate: 50.0,
            revenue_model: "Per-word and retainer billing",
            cost_structure: "Tools, marketing, education",
        },
        MiniScenario {
            id: 13,
            scenario_id: 3,
            name: "Digital Marketing",
            description: "Performance marketing for client accounts",
            recommended_investment_min: 1_000.0,
            recommended_investment_max: 10_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 70.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 35.0,
            revenue_model: "Retainers and performance fees",
            cost_structure: "Ad platforms, tools, marketing",
        },
        MiniScenario {
            id: 14,
            scenario_id: 4,
            name: "Digital Marketing Agency",
            description: "Full-service online marketing agency",
            recommended_investment_min: 10_000.0,
            recommended_investment_max: 80_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 50.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 30.0,
            revenue_model: "Monthly retainers",
            cost_structure: "Salaries, tools, office, sales",
        },
        MiniScenario {
            id: 15,
            scenario_id: 4,
            name: "Web Design Agency",
            description: "Design and build websites for clients",
            recommended_investment_min: 8_000.0,
            recommended_investment_max: 60_000.0,
            typical_roi_min: 25.0,
            typical_roi_max: 55.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 35.0,
            revenue_model: "Fixed-bid projects with maintenance retainers",
            cost_structure: "Salaries, tools, sales, subcontractors",
        },
        MiniScenario {
            id: 16,
            scenario_id: 4,
            name: "SEO Agency",
            description: "Search optimization services",
            recommended_investment_min: 5_000.0,
            recommended_investment_max: 50_000.0,
            typical_roi_min: 20.0,
            typical_roi_max: 50.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 35.0,
            revenue_model: "Monthly retainers",
            cost_structure: "Salaries, tools, content production",
        },
        MiniScenario {
            id: 17,
            scenario_id: 5,
            name: "Food Truck",
            description: "Mobile food service with a single vehicle",
            recommended_investment_min: 40_000.0,
            recommended_investment_max: 150_000.0,
            typical_roi_min: 10.0,
            typical_roi_max: 30.0,
            risk_tier: RiskTier::High,
            flat_roi_rate: 20.0,
            revenue_model: "Direct food sales",
            cost_structure: "Vehicle, ingredients, permits, staff",
        },
        MiniScenario {
            id: 18,
            scenario_id: 5,
            name: "Coffee Shop",
            description: "Neighborhood cafe with counter service",
            recommended_investment_min: 60_000.0,
            recommended_investment_max: 300_000.0,
            typical_roi_min: 8.0,
            typical_roi_max: 25.0,
            risk_tier: RiskTier::High,
            flat_roi_rate: 20.0,
            revenue_model: "Direct beverage and food sales",
            cost_structure: "Rent, fit-out, ingredients, staff",
        },
    ]
}

fn build_countries() -> Vec<CountryTaxProfile> {
    // 2024 rates carried over from the reference data set.
    vec![
        CountryTaxProfile {
            country_code: "US",
            country_name: "United States",
            corporate_tax_rate: 21.0,
            capital_gains_tax_rate: 20.0,
            dividend_tax_rate: 20.0,
            vat_rate: 0.0,
            social_security_rate: 15.3,
            currency: "USD",
            gdp_per_capita: 70_248.0,
            ease_of_business_rank: 6,
            corruption_index: 67.0,
        },
        CountryTaxProfile {
            country_code: "GB",
            country_name: "United Kingdom",
            corporate_tax_rate: 25.0,
            capital_gains_tax_rate: 20.0,
            dividend_tax_rate: 33.75,
            vat_rate: 20.0,
            social_security_rate: 25.8,
            currency: "GBP",
            gdp_per_capita: 46_344.0,
            ease_of_business_rank: 8,
            corruption_index: 78.0,
        },
        CountryTaxProfile {
            country_code: "DE",
            country_name: "Germany",
            corporate_tax_rate: 29.9,
            capital_gains_tax_rate: 26.375,
            dividend_tax_rate: 26.375,
            vat_rate: 19.0,
            social_security_rate: 39.95,
            currency: "EUR",
            gdp_per_capita: 50_206.0,
            ease_of_business_rank: 22,
            corruption_index: 79.0,
        },
        CountryTaxProfile {
            country_code: "FR",
            country_name: "France",
            corporate_tax_rate: 25.8,
            capital_gains_tax_rate: 30.0,
            dividend_tax_rate: 30.0,
            vat_rate: 20.0,
            social_security_rate: 45.0,
            currency: "EUR",
            gdp_per_capita: 42_330.0,
            ease_of_business_rank: 32,
            corruption_index: 69.0,
        },
        CountryTaxProfile {
            country_code: "CA",
            country_name: "Canada",
            corporate_tax_rate: 26.5,
            capital_gains_tax_rate: 26.75,
            dividend_tax_rate: 39.34,
            vat_rate: 5.0,
            social_security_rate: 9.9,
            currency: "CAD",
            gdp_per_capita: 51_988.0,
            ease_of_business_rank: 23,
            corruption_index: 74.0,
        },
        CountryTaxProfile {
            country_code: "AU",
            country_name: "Australia",
            corporate_tax_rate: 30.0,
            capital_gains_tax_rate: 22.5,
            dividend_tax_rate: 30.0,
            vat_rate: 10.0,
            social_security_rate: 9.5,
            currency: "AUD",
            gdp_per_capita: 55_057.0,
            ease_of_business_rank: 14,
            corruption_index: 75.0,
        },
        CountryTaxProfile {
            country_code: "JP",
            country_name: "Japan",
            corporate_tax_rate: 29.7,
            capital_gains_tax_rate: 20.315,
            dividend_tax_rate: 20.315,
            vat_rate: 10.0,
            social_security_rate: 30.0,
            currency: "JPY",
            gdp_per_capita: 39_340.0,
            ease_of_business_rank: 29,
            corruption_index: 73.0,
        },
        CountryTaxProfile {
            country_code: "SG",
            country_name: "Singapore",
            corporate_tax_rate: 17.0,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 0.0,
            vat_rate: 7.0,
            social_security_rate: 37.0,
            currency: "SGD",
            gdp_per_capita: 72_794.0,
            ease_of_business_rank: 2,
            corruption_index: 85.0,
        },
        CountryTaxProfile {
            country_code: "CH",
            country_name: "Switzerland",
            corporate_tax_rate: 18.0,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 35.0,
            vat_rate: 7.7,
            social_security_rate: 12.2,
            currency: "CHF",
            gdp_per_capita: 83_717.0,
            ease_of_business_rank: 36,
            corruption_index: 84.0,
        },
        CountryTaxProfile {
            country_code: "NL",
            country_name: "Netherlands",
            corporate_tax_rate: 25.8,
            capital_gains_tax_rate: 31.0,
            dividend_tax_rate: 26.9,
            vat_rate: 21.0,
            social_security_rate: 28.15,
            currency: "EUR",
            gdp_per_capita: 52_331.0,
            ease_of_business_rank: 42,
            corruption_index: 82.0,
        },
        CountryTaxProfile {
            country_code: "SE",
            country_name: "Sweden",
            corporate_tax_rate: 20.6,
            capital_gains_tax_rate: 30.0,
            dividend_tax_rate: 30.0,
            vat_rate: 25.0,
            social_security_rate: 31.42,
            currency: "SEK",
            gdp_per_capita: 51_648.0,
            ease_of_business_rank: 10,
            corruption_index: 82.0,
        },
        CountryTaxProfile {
            country_code: "NO",
            country_name: "Norway",
            corporate_tax_rate: 22.0,
            capital_gains_tax_rate: 22.0,
            dividend_tax_rate: 35.2,
            vat_rate: 25.0,
            social_security_rate: 14.1,
            currency: "NOK",
            gdp_per_capita: 75_420.0,
            ease_of_business_rank: 9,
            corruption_index: 84.0,
        },
        CountryTaxProfile {
            country_code: "DK",
            country_name: "Denmark",
            corporate_tax_rate: 22.0,
            capital_gains_tax_rate: 27.0,
            dividend_tax_rate: 27.0,
            vat_rate: 25.0,
            social_security_rate: 0.0,
            currency: "DKK",
            gdp_per_capita: 60_170.0,
            ease_of_business_rank: 4,
            corruption_index: 90.0,
        },
        CountryTaxProfile {
            country_code: "FI",
            country_name: "Finland",
            corporate_tax_rate: 20.0,
            capital_gains_tax_rate: 30.0,
            dividend_tax_rate: 25.5,
            vat_rate: 24.0,
            social_security_rate: 24.4,
            currency: "EUR",
            gdp_per_capita: 48_810.0,
            ease_of_business_rank: 20,
            corruption_index: 87.0,
        },
        CountryTaxProfile {
            country_code: "IT",
            country_name: "Italy",
            corporate_tax_rate: 24.0,
            capital_gains_tax_rate: 26.0,
            dividend_tax_rate: 26.0,
            vat_rate: 22.0,
            social_security_rate: 33.0,
            currency: "EUR",
            gdp_per_capita: 35_220.0,
            ease_of_business_rank: 58,
            corruption_index: 56.0,
        },
        CountryTaxProfile {
            country_code: "ES",
            country_name: "Spain",
            corporate_tax_rate: 25.0,
            capital_gains_tax_rate: 23.0,
            dividend_tax_rate: 23.0,
            vat_rate: 21.0,
            social_security_rate: 36.25,
            currency: "EUR",
            gdp_per_capita: 29_565.0,
            ease_of_business_rank: 30,
            corruption_index: 60.0,
        },
        CountryTaxProfile {
            country_code: "PT",
            country_name: "Portugal",
            corporate_tax_rate: 21.0,
            capital_gains_tax_rate: 28.0,
            dividend_tax_rate: 28.0,
            vat_rate: 23.0,
            social_security_rate: 34.75,
            currency: "EUR",
            gdp_per_capita: 24_252.0,
            ease_of_business_rank: 39,
            corruption_index: 62.0,
        },
        CountryTaxProfile {
            country_code: "IE",
            country_name: "Ireland",
            corporate_tax_rate: 12.5,
            capital_gains_tax_rate: 33.0,
            dividend_tax_rate: 25.0,
            vat_rate: 23.0,
            social_security_rate: 14.75,
            currency: "EUR",
            gdp_per_capita: 83_966.0,
            ease_of_business_rank: 24,
            corruption_index: 77.0,
        },
        CountryTaxProfile {
            country_code: "BE",
            country_name: "Belgium",
            corporate_tax_rate: 25.0,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 30.0,
            vat_rate: 21.0,
            social_security_rate: 47.0,
            currency: "EUR",
            gdp_per_capita: 46_553.0,
            ease_of_business_rank: 45,
            corruption_index: 76.0,
        },
        CountryTaxProfile {
            country_code: "AT",
            country_name: "Austria",
            corporate_tax_rate: 25.0,
            capital_gains_tax_rate: 27.5,
            dividend_tax_rate: 27.5,
            vat_rate: 20.0,
            social_security_rate: 40.65,
            currency: "EUR",
            gdp_per_capita: 48_104.0,
            ease_of_business_rank: 21,
            corruption_index: 71.0,
        },
        CountryTaxProfile {
            country_code: "NZ",
            country_name: "New Zealand",
            corporate_tax_rate: 28.0,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 33.0,
            vat_rate: 15.0,
            social_security_rate: 0.0,
            currency: "NZD",
            gdp_per_capita: 42_941.0,
            ease_of_business_rank: 1,
            corruption_index: 87.0,
        },
        CountryTaxProfile {
            country_code: "KR",
            country_name: "South Korea",
            corporate_tax_rate: 25.0,
            capital_gains_tax_rate: 22.0,
            dividend_tax_rate: 25.0,
            vat_rate: 10.0,
            social_security_rate: 18.3,
            currency: "KRW",
            gdp_per_capita: 32_423.0,
            ease_of_business_rank: 5,
            corruption_index: 63.0,
        },
        CountryTaxProfile {
            country_code: "HK",
            country_name: "Hong Kong",
            corporate_tax_rate: 16.5,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 0.0,
            vat_rate: 0.0,
            social_security_rate: 10.0,
            currency: "HKD",
            gdp_per_capita: 48_717.0,
            ease_of_business_rank: 3,
            corruption_index: 76.0,
        },
        CountryTaxProfile {
            country_code: "AE",
            country_name: "United Arab Emirates",
            corporate_tax_rate: 9.0,
            capital_gains_tax_rate: 0.0,
            dividend_tax_rate: 0.0,
            vat_rate: 5.0,
            social_security_rate: 17.5,
            currency: "AED",
            gdp_per_capita: 43_470.0,
            ease_of_business_rank: 16,
            corruption_index: 67.0,
        },
        CountryTaxProfile {
            country_code: "BR",
            country_name: "Brazil",
            corporate_tax_rate: 34.0,
            capital_gains_tax_rate: 15.0,
            dividend_tax_rate: 0.0,
            vat_rate: 17.0,
            social_security_rate: 28.8,
            currency: "BRL",
            gdp_per_capita: 8_917.0,
            ease_of_business_rank: 124,
            corruption_index: 38.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_lookup_resolves_known_ids() {
        let saas = scenario_by_id(2).expect("SaaS must exist");
        assert_eq!(saas.name, "SaaS");
        assert_eq!(saas.category, BusinessCategory::Technology);
    }

    #[test]
    fn scenario_lookup_rejects_unknown_ids() {
        let err = scenario_by_id(999).expect_err("must be missing");
        assert_eq!(err, CalcError::NotFound("business scenario 999".to_string()));
    }

    #[test]
    fn every_mini_scenario_has_a_parent() {
        for mini in mini_scenarios() {
            assert!(
                scenario_by_id(mini.scenario_id).is_ok(),
                "mini {} orphaned",
                mini.name
            );
        }
    }

    #[test]
    fn mini_scenario_lookup_enforces_parentage() {
        assert!(mini_scenario_for(2, 6).is_ok());
        let err = mini_scenario_for(1, 6).expect_err("B2B SaaS is not under E-commerce");
        assert!(matches!(err, CalcError::NotFound(_)));
    }

    #[test]
    fn first_mini_exists_for_every_scenario() {
        for scenario in scenarios() {
            assert!(first_mini_for(scenario.id).is_ok());
        }
    }

    #[test]
    fn country_lookup_is_case_insensitive_exact_match() {
        let us = country_by_code("us").expect("US must exist");
        assert_eq!(us.country_code, "US");
        assert!((us.corporate_tax_rate - 21.0).abs() < 1e-9);

        let sg = country_by_code(" SG ").expect("SG must exist");
        assert!((sg.corporate_tax_rate - 17.0).abs() < 1e-9);
    }

    #[test]
    fn country_lookup_rejects_unknown_codes() {
        let err = country_by_code("ZZ").expect_err("ZZ must be missing");
        assert_eq!(err, CalcError::NotFound("country ZZ".to_string()));
    }

    #[test]
    fn declared_ranges_are_ordered() {
        for scenario in scenarios() {
            assert!(scenario.typical_roi_min <= scenario.typical_roi_max);
            assert!(scenario.recommended_investment_min <= scenario.recommended_investment_max);
        }
        for mini in mini_scenarios() {
            assert!(mini.typical_roi_min <= mini.typical_roi_max);
            assert!(mini.flat_roi_rate > 0.0);
        }
    }
}
