use super::types::{
    BusinessCategory, CalcError, CalculationFactors, CalculationResult, CountryTaxProfile,
    InvestmentTerms, Level, MarketSize, MiniScenario, RiskAssessment, RiskTier, RoiMode,
    ScenarioDescriptor, TimeUnit,
};

/// Volatility source for the market-adjustment step. `Disabled` contributes
/// exactly 0.0 so results are reproducible; `Seeded` derives a draw in
/// [-0.05, +0.05] from the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Volatility {
    #[default]
    Disabled,
    Seeded(u64),
}

impl Volatility {
    fn draw(self) -> f64 {
        match self {
            Volatility::Disabled => 0.0,
            Volatility::Seeded(seed) => unit_f64(splitmix64(seed)) * 0.10 - 0.05,
        }
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn unit_f64(v: u64) -> f64 {
    const DENOM: f64 = (1_u64 << 53) as f64;
    ((v >> 11) as f64 + 0.5) / DENOM
}

pub fn calculate(
    terms: &InvestmentTerms,
    scenario: &ScenarioDescriptor,
    mini: &MiniScenario,
    country: &CountryTaxProfile,
    mode: RoiMode,
    volatility: Volatility,
) -> Result<CalculationResult, CalcError> {
    validate_terms(terms)?;

    let time_in_years = time_in_years(terms.time_period, terms.time_unit);
    let total_investment = terms.initial_investment + terms.additional_costs;

    let base_roi_rate = base_roi_rate(mode, scenario, mini, country);
    let market_factor = market_factor(scenario);
    let volatility_draw = volatility.draw();
    // adjusted rate can never drop below a total loss of half the stake per year
    let effective_rate = (base_roi_rate * market_factor + volatility_draw).max(-0.5);

    let final_value = total_investment * (1.0 + effective_rate).powf(time_in_years);
    let net_profit = final_value - total_investment;
    let roi_percentage = net_profit / total_investment * 100.0;
    let annualized_roi = annualized_roi(final_value, total_investment, time_in_years, roi_percentage);

    let effective_tax_rate = country.corporate_tax_rate * business_tax_factor(scenario.category);
    let tax_amount = if net_profit > 0.0 {
        net_profit * effective_tax_rate / 100.0
    } else {
        0.0
    };
    let after_tax_profit = net_profit - tax_amount;
    let after_tax_roi = after_tax_profit / total_investment * 100.0;

    let risk_score = risk_score(scenario, country, total_investment);

    Ok(CalculationResult {
        final_value,
        net_profit,
        roi_percentage,
        annualized_roi,
        total_investment,
        tax_amount,
        after_tax_profit,
        after_tax_roi,
        effective_tax_rate,
        risk_score,
        market_analysis: market_analysis(scenario, country),
        recommendations: recommendations(
            roi_percentage,
            risk_score,
            after_tax_profit,
            total_investment,
            country,
        ),
        scenario_name: scenario.name.to_string(),
        mini_scenario_name: mini.name.to_string(),
        country_name: country.country_name.to_string(),
        factors: CalculationFactors {
            base_roi_rate,
            market_factor,
            volatility: volatility_draw,
            time_in_years,
        },
    })
}

fn validate_terms(terms: &InvestmentTerms) -> Result<(), CalcError> {
    if !terms.initial_investment.is_finite() || terms.initial_investment <= 0.0 {
        return Err(CalcError::InvalidInput(
            "initial_investment must be a positive finite number".to_string(),
        ));
    }
    if !terms.additional_costs.is_finite() || terms.additional_costs < 0.0 {
        return Err(CalcError::InvalidInput(
            "additional_costs must be a non-negative finite number".to_string(),
        ));
    }
    if !terms.time_period.is_finite() || terms.time_period <= 0.0 {
        return Err(CalcError::InvalidInput(
            "time_period must be a positive finite number".to_string(),
        ));
    }
    Ok(())
}

fn time_in_years(period: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Years => period,
        TimeUnit::Months => period / 12.0,
        TimeUnit::Weeks => period / 52.0,
        TimeUnit::Days => period / 365.0,
    }
}

fn base_roi_rate(
    mode: RoiMode,
    scenario: &ScenarioDescriptor,
    mini: &MiniScenario,
    country: &CountryTaxProfile,
) -> f64 {
    match mode {
        RoiMode::RangeDerived => {
            let mut rate = (mini.typical_roi_min + mini.typical_roi_max) / 2.0 / 100.0;
            if country.gdp_per_capita > 50_000.0 {
                rate *= 1.1;
            } else if country.gdp_per_capita < 10_000.0 {
                rate *= 0.8;
            }
            if country.ease_of_business_rank < 50 {
                rate *= 1.05;
            } else if country.ease_of_business_rank > 100 {
                rate *= 0.9;
            }
            rate
        }
        RoiMode::FlatTable => mini.flat_roi_rate * scenario.industry_multiplier / 100.0,
    }
}

fn market_factor(scenario: &ScenarioDescriptor) -> f64 {
    let mut factor: f64 = 1.0;
    match scenario.market_size {
        MarketSize::Large => factor *= 1.05,
        MarketSize::Small => factor *= 0.9,
        MarketSize::Medium => {}
    }
    match scenario.competition {
        Level::High => factor *= 0.85,
        Level::Low => factor *= 1.15,
        Level::Medium => {}
    }
    match scenario.scalability {
        Level::High => factor *= 1.1,
        Level::Low => factor *= 0.9,
        Level::Medium => {}
    }
    factor.clamp(0.8, 1.2)
}

fn annualized_roi(final_value: f64, total: f64, years: f64, roi_percentage: f64) -> f64 {
    if years <= 0.0 {
        return roi_percentage;
    }
    ((final_value / total).powf(1.0 / years) - 1.0) * 100.0
}

fn business_tax_factor(category: BusinessCategory) -> f64 {
    match category {
        BusinessCategory::Technology => 0.8,
        BusinessCategory::Service => 1.1,
        _ => 1.0,
    }
}

fn risk_score(
    scenario: &ScenarioDescriptor,
    country: &CountryTaxProfile,
    total_investment: f64,
) -> f64 {
    let mut score: f64 = match scenario.risk_tier {
        RiskTier::Low => 3.0,
        RiskTier::Medium => 5.0,
        RiskTier::High => 7.0,
    };

    if country.ease_of_business_rank > 100 {
        score += 1.0;
    } else if country.ease_of_business_rank < 50 {
        score -= 0.5;
    }
    if country.corruption_index < 50.0 {
        score += 1.0;
    } else if country.corruption_index > 80.0 {
        score -= 0.5;
    }

    if total_investment > 100_000.0 {
        score += 1.0;
    } else if total_investment > 50_000.0 {
        score += 0.5;
    }

    score.clamp(0.0, 10.0)
}

fn market_analysis(scenario: &ScenarioDescriptor, country: &CountryTaxProfile) -> String {
    format!(
        "{} operates in a {} market with {} competition, {} scalability and {} regulatory exposure. \
         Typical returns range from {:.0}% to {:.0}% with profitability expected within {}. \
         In {}, the corporate tax rate is {:.1}% and the ease-of-business rank is {}.",
        scenario.name,
        market_size_word(scenario.market_size),
        level_word(scenario.competition),
        level_word(scenario.scalability),
        level_word(scenario.regulation),
        scenario.typical_roi_min,
        scenario.typical_roi_max,
        scenario.time_to_profitability,
        country.country_name,
        country.corporate_tax_rate,
        country.ease_of_business_rank,
    )
}

fn market_size_word(size: MarketSize) -> &'static str {
    match size {
        MarketSize::Small => "small",
        MarketSize::Medium => "medium",
        MarketSize::Large => "large",
    }
}

fn level_word(level: Level) -> &'static str {
    match level {
        Level::Low => "low",
        Level::Medium => "medium",
        Level::High => "high",
    }
}

fn recommendations(
    roi_percentage: f64,
    risk_score: f64,
    after_tax_profit: f64,
    total_investment: f64,
    country: &CountryTaxProfile,
) -> Vec<String> {
    let mut recs = Vec::new();

    if roi_percentage > 25.0 {
        recs.push("Excellent ROI potential - consider scaling up investment".to_string());
    } else if roi_percentage > 15.0 {
        recs.push("Strong ROI - proceed with recommended investment amount".to_string());
    } else if roi_percentage > 10.0 {
        recs.push("Moderate ROI - consider optimization strategies".to_string());
    } else {
        recs.push("Low ROI - evaluate alternative investment opportunities".to_string());
    }

    if risk_score > 7.0 {
        recs.push("High risk profile - implement comprehensive risk mitigation".to_string());
    } else if risk_score > 5.0 {
        recs.push("Moderate risk - consider diversification strategies".to_string());
    } else {
        recs.push("Low risk profile - suitable for conservative investors".to_string());
    }

    if after_tax_profit > total_investment * 0.2 {
        recs.push("Strong after-tax returns - attractive for long-term investment".to_string());
    } else if after_tax_profit > total_investment * 0.1 {
        recs.push("Decent after-tax returns - monitor performance closely".to_string());
    } else {
        recs.push("Low after-tax returns - evaluate tax optimization strategies".to_string());
    }

    match country.country_code {
        "SG" | "HK" | "AE" => {
            recs.push("Consider tax advantages in the selected jurisdiction".to_string());
        }
        "US" | "GB" | "DE" => {
            recs.push("Stable regulatory environment - favorable for business growth".to_string());
        }
        _ => {}
    }
    if country.ease_of_business_rank > 100 {
        recs.push(
            "Challenging business environment - budget extra time for setup and compliance"
                .to_string(),
        );
    }

    recs
}

/// Five-factor risk breakdown for a scenario in a country. Each factor is on
/// its own 0-1 scale, distinct from the pipeline's 0-10 risk score.
pub fn assess_risk(
    scenario: &ScenarioDescriptor,
    country: &CountryTaxProfile,
    investment_amount: f64,
) -> RiskAssessment {
    let market_risk = market_risk(scenario, country);
    let operational_risk = operational_risk(scenario);
    let financial_risk = financial_risk(investment_amount, scenario);
    let regulatory_risk = regulatory_risk(country);
    let competition_risk = match scenario.competition {
        Level::High => 0.7,
        Level::Medium => 0.5,
        Level::Low => 0.3,
    };

    let overall_risk_score =
        (market_risk + operational_risk + financial_risk + regulatory_risk + competition_risk)
            / 5.0;
    let risk_level = if overall_risk_score < 0.3 {
        RiskTier::Low
    } else if overall_risk_score < 0.6 {
        RiskTier::Medium
    } else {
        RiskTier::High
    };

    RiskAssessment {
        scenario_id: scenario.id,
        investment_amount,
        country_code: country.country_code.to_string(),
        market_risk,
        operational_risk,
        financial_risk,
        regulatory_risk,
        competition_risk,
        overall_risk_score,
        risk_level,
    }
}

fn market_risk(scenario: &ScenarioDescriptor, country: &CountryTaxProfile) -> f64 {
    let mut risk: f64 = 0.3;
    match scenario.market_size {
        MarketSize::Small => risk += 0.2,
        MarketSize::Large => risk -= 0.1,
        MarketSize::Medium => {}
    }
    match scenario.competition {
        Level::High => risk += 0.3,
        Level::Low => risk -= 0.2,
        Level::Medium => {}
    }
    if country.gdp_per_capita < 10_000.0 {
        risk += 0.2;
    } else if country.gdp_per_capita > 50_000.0 {
        risk -= 0.1;
    }
    risk.clamp(0.0, 1.0)
}

fn operational_risk(scenario: &ScenarioDescriptor) -> f64 {
    let mut risk: f64 = 0.4;
    match scenario.scalability {
        Level::Low => risk += 0.2,
        Level::High => risk -= 0.1,
        Level::Medium => {}
    }
    match scenario.regulation {
        Level::High => risk += 0.3,
        Level::Low => risk -= 0.2,
        Level::Medium => {}
    }
    risk.clamp(0.0, 1.0)
}

fn financial_risk(investment_amount: f64, scenario: &ScenarioDescriptor) -> f64 {
    let mut risk: f64 = 0.3;
    if investment_amount < scenario.recommended_investment_min {
        risk += 0.3;
    } else if investment_amount > scenario.recommended_investment_max {
        risk += 0.2;
    } else {
        risk -= 0.1;
    }
    risk.clamp(0.0, 1.0)
}

fn regulatory_risk(country: &CountryTaxProfile) -> f64 {
    let mut risk: f64 = 0.3;
    if country.ease_of_business_rank > 100 {
        risk += 0.3;
    } else if country.ease_of_business_rank < 50 {
        risk -= 0.2;
    }
    if country.corruption_index < 50.0 {
        risk += 0.2;
    } else if country.corruption_index > 80.0 {
        risk -= 0.1;
    }
    risk.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_terms() -> InvestmentTerms {
        InvestmentTerms {
            initial_investment: 10_000.0,
            additional_costs: 0.0,
            time_period: 1.0,
            time_unit: TimeUnit::Years,
        }
    }

    // All adjustment steps neutral: medium descriptors, mid-range country
    // economics, category without a tax factor. The 15-25 range averages to a
    // 20% base rate that survives the pipeline unchanged.
    fn sample_scenario() -> ScenarioDescriptor {
        ScenarioDescriptor {
            id: 1,
            name: "Test Venture",
            category: BusinessCategory::Retail,
            description: "fixture",
            recommended_investment_min: 1_000.0,
            recommended_investment_max: 100_000.0,
            typical_roi_min: 15.0,
            typical_roi_max: 25.0,
            risk_tier: RiskTier::Medium,
            market_size: MarketSize::Medium,
            competition: Level::Medium,
            scalability: Level::Medium,
            regulation: Level::Medium,
            time_to_profitability: "6-12 months",
            industry_multiplier: 1.0,
        }
    }

    fn sample_mini() -> MiniScenario {
        MiniScenario {
            id: 1,
            scenario_id: 1,
            name: "Test Mini",
            description: "fixture",
            recommended_investment_min: 1_000.0,
            recommended_investment_max: 50_000.0,
            typical_roi_min: 15.0,
            typical_roi_max: 25.0,
            risk_tier: RiskTier::Medium,
            flat_roi_rate: 20.0,
            revenue_model: "fixture",
            cost_structure: "fixture",
        }
    }

    fn country_with_rate(code: &'static str, corporate_rate: f64) -> CountryTaxProfile {
        CountryTaxProfile {
            country_code: code,
            country_name: "Testland",
            corporate_tax_rate: corporate_rate,
            capital_gains_tax_rate: 20.0,
            dividend_tax_rate: 20.0,
            vat_rate: 10.0,
            social_security_rate: 10.0,
            currency: "XTS",
            gdp_per_capita: 30_000.0,
            ease_of_business_rank: 60,
            corruption_index: 65.0,
        }
    }

    fn calc(
        terms: &InvestmentTerms,
        country: &CountryTaxProfile,
    ) -> Result<CalculationResult, CalcError> {
        calculate(
            terms,
            &sample_scenario(),
            &sample_mini(),
            country,
            RoiMode::RangeDerived,
            Volatility::Disabled,
        )
    }

    #[test]
    fn one_year_flat_us_rate_worked_example() {
        let result = calc(&sample_terms(), &country_with_rate("XA", 21.0)).unwrap();

        assert_approx(result.total_investment, 10_000.0);
        assert_approx(result.final_value, 12_000.0);
        assert_approx(result.net_profit, 2_000.0);
        assert_approx(result.roi_percentage, 20.0);
        assert_approx(result.annualized_roi, 20.0);
        assert_approx(result.tax_amount, 420.0);
        assert_approx(result.after_tax_profit, 1_580.0);
        assert_approx(result.after_tax_roi, 15.8);
        assert_approx(result.effective_tax_rate, 21.0);
        assert_approx(result.factors.base_roi_rate, 0.2);
        assert_approx(result.factors.market_factor, 1.0);
        assert_approx(result.factors.volatility, 0.0);
    }

    #[test]
    fn lower_corporate_rate_leaves_more_after_tax() {
        let high_tax = calc(&sample_terms(), &country_with_rate("XA", 21.0)).unwrap();
        let low_tax = calc(&sample_terms(), &country_with_rate("XB", 17.0)).unwrap();

        assert_approx(high_tax.net_profit, low_tax.net_profit);
        assert!(low_tax.after_tax_profit > high_tax.after_tax_profit);
        assert_approx(low_tax.tax_amount, 340.0);
    }

    #[test]
    fn six_months_compounds_as_half_a_year() {
        let terms = InvestmentTerms {
            time_period: 6.0,
            time_unit: TimeUnit::Months,
            ..sample_terms()
        };
        let result = calc(&terms, &country_with_rate("XA", 21.0)).unwrap();

        assert_approx(result.factors.time_in_years, 0.5);
        // 1.2^0.5 - 1
        assert_approx(result.roi_percentage, (1.2_f64.sqrt() - 1.0) * 100.0);
        assert_approx(result.annualized_roi, 20.0);
        assert!(result.annualized_roi > result.roi_percentage);
    }

    #[test]
    fn zero_initial_investment_is_rejected() {
        let terms = InvestmentTerms {
            initial_investment: 0.0,
            ..sample_terms()
        };
        let err = calc(&terms, &country_with_rate("XA", 21.0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_and_negative_terms_are_rejected() {
        for terms in [
            InvestmentTerms {
                initial_investment: f64::NAN,
                ..sample_terms()
            },
            InvestmentTerms {
                additional_costs: -1.0,
                ..sample_terms()
            },
            InvestmentTerms {
                time_period: 0.0,
                ..sample_terms()
            },
            InvestmentTerms {
                time_period: f64::INFINITY,
                ..sample_terms()
            },
        ] {
            let err = calc(&terms, &country_with_rate("XA", 21.0)).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput(_)));
        }
    }

    #[test]
    fn flat_table_mode_applies_industry_multiplier() {
        let mut scenario = sample_scenario();
        scenario.industry_multiplier = 1.3;
        let result = calculate(
            &sample_terms(),
            &scenario,
            &sample_mini(),
            &country_with_rate("XA", 21.0),
            RoiMode::FlatTable,
            Volatility::Disabled,
        )
        .unwrap();

        assert_approx(result.factors.base_roi_rate, 0.26);
        assert_approx(result.roi_percentage, 26.0);
    }

    #[test]
    fn range_derived_mode_adjusts_for_country_economics() {
        let mut rich = country_with_rate("XA", 21.0);
        rich.gdp_per_capita = 70_000.0;
        rich.ease_of_business_rank = 6;
        let result = calc(&sample_terms(), &rich).unwrap();
        assert_approx(result.factors.base_roi_rate, 0.2 * 1.1 * 1.05);

        let mut poor = country_with_rate("XB", 21.0);
        poor.gdp_per_capita = 8_000.0;
        poor.ease_of_business_rank = 124;
        let result = calc(&sample_terms(), &poor).unwrap();
        assert_approx(result.factors.base_roi_rate, 0.2 * 0.8 * 0.9);
    }

    #[test]
    fn technology_and_service_adjust_the_tax_rate() {
        let mut tech = sample_scenario();
        tech.category = BusinessCategory::Technology;
        let result = calculate(
            &sample_terms(),
            &tech,
            &sample_mini(),
            &country_with_rate("XA", 21.0),
            RoiMode::RangeDerived,
            Volatility::Disabled,
        )
        .unwrap();
        assert_approx(result.effective_tax_rate, 16.8);

        let mut service = sample_scenario();
        service.category = BusinessCategory::Service;
        let result = calculate(
            &sample_terms(),
            &service,
            &sample_mini(),
            &country_with_rate("XA", 21.0),
            RoiMode::RangeDerived,
            Volatility::Disabled,
        )
        .unwrap();
        assert_approx(result.effective_tax_rate, 23.1);
    }

    #[test]
    fn losses_carry_no_tax() {
        let mut mini = sample_mini();
        mini.typical_roi_min = -40.0;
        mini.typical_roi_max = -20.0;
        let result = calculate(
            &sample_terms(),
            &sample_scenario(),
            &mini,
            &country_with_rate("XA", 21.0),
            RoiMode::RangeDerived,
            Volatility::Disabled,
        )
        .unwrap();

        assert!(result.net_profit < 0.0);
        assert_approx(result.tax_amount, 0.0);
        assert_approx(result.after_tax_profit, result.net_profit);
    }

    #[test]
    fn effective_rate_is_floored_at_minus_half() {
        let mut mini = sample_mini();
        mini.typical_roi_min = -200.0;
        mini.typical_roi_max = -100.0;
        let result = calculate(
            &sample_terms(),
            &sample_scenario(),
            &mini,
            &country_with_rate("XA", 21.0),
            RoiMode::RangeDerived,
            Volatility::Disabled,
        )
        .unwrap();

        // floored at -0.5, so one year keeps half the stake
        assert_approx(result.final_value, 5_000.0);
        assert_approx(result.roi_percentage, -50.0);
    }

    #[test]
    fn market_factor_is_clamped() {
        let mut favorable = sample_scenario();
        favorable.market_size = MarketSize::Large;
        favorable.competition = Level::Low;
        favorable.scalability = Level::High;
        // 1.05 * 1.15 * 1.1 = 1.328, clamped
        assert_approx(market_factor(&favorable), 1.2);

        let mut hostile = sample_scenario();
        hostile.market_size = MarketSize::Small;
        hostile.competition = Level::High;
        hostile.scalability = Level::Low;
        // 0.9 * 0.85 * 0.9 = 0.6885, clamped
        assert_approx(market_factor(&hostile), 0.8);
    }

    #[test]
    fn seeded_volatility_is_reproducible_and_bounded() {
        let a = Volatility::Seeded(42).draw();
        let b = Volatility::Seeded(42).draw();
        assert_approx(a, b);
        assert!(Volatility::Seeded(7).draw() != a);

        for seed in 0..1000_u64 {
            let draw = Volatility::Seeded(seed).draw();
            assert!((-0.05..=0.05).contains(&draw), "seed {seed} drew {draw}");
        }
        assert_approx(Volatility::Disabled.draw(), 0.0);
    }

    #[test]
    fn risk_score_tracks_tier_country_and_size() {
        let scenario = sample_scenario();
        let neutral = country_with_rate("XA", 21.0);
        assert_approx(risk_score(&scenario, &neutral, 10_000.0), 5.0);
        assert_approx(risk_score(&scenario, &neutral, 60_000.0), 5.5);
        assert_approx(risk_score(&scenario, &neutral, 150_000.0), 6.0);

        let mut hard = country_with_rate("XB", 21.0);
        hard.ease_of_business_rank = 124;
        hard.corruption_index = 38.0;
        assert_approx(risk_score(&scenario, &hard, 10_000.0), 7.0);

        let mut easy = country_with_rate("XC", 21.0);
        easy.ease_of_business_rank = 4;
        easy.corruption_index = 90.0;
        assert_approx(risk_score(&scenario, &easy, 10_000.0), 4.0);
    }

    #[test]
    fn recommendations_cover_roi_risk_profit_and_country() {
        let result = calc(&sample_terms(), &country_with_rate("XA", 21.0)).unwrap();
        // one line each for ROI, risk, and after-tax profit tiers
        assert_eq!(result.recommendations.len(), 3);
        assert!(result.recommendations[0].starts_with("Strong ROI"));

        let result = calc(&sample_terms(), &country_with_rate("SG", 17.0)).unwrap();
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("tax advantages"))
        );
    }

    #[test]
    fn risk_assessment_grades_overall_mean() {
        let scenario = sample_scenario();
        let country = country_with_rate("XA", 21.0);
        let assessment = assess_risk(&scenario, &country, 10_000.0);

        assert_approx(assessment.market_risk, 0.3);
        assert_approx(assessment.operational_risk, 0.4);
        assert_approx(assessment.financial_risk, 0.2);
        assert_approx(assessment.regulatory_risk, 0.3);
        assert_approx(assessment.competition_risk, 0.5);
        assert_approx(assessment.overall_risk_score, 0.34);
        assert_eq!(assessment.risk_level, RiskTier::Medium);
    }

    #[test]
    fn risk_assessment_flags_out_of_range_investment() {
        let scenario = sample_scenario();
        let country = country_with_rate("XA", 21.0);

        let too_small = assess_risk(&scenario, &country, 100.0);
        assert_approx(too_small.financial_risk, 0.6);
        let too_large = assess_risk(&scenario, &country, 500_000.0);
        assert_approx(too_large.financial_risk, 0.5);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn roi_grows_with_investment_value(initial in 100.0_f64..1e7, scale in 1.01_f64..10.0) {
            let base = InvestmentTerms { initial_investment: initial, ..sample_terms() };
            let bigger = InvestmentTerms { initial_investment: initial * scale, ..sample_terms() };
            let country = country_with_rate("XA", 21.0);

            let a = calc(&base, &country).unwrap();
            let b = calc(&bigger, &country).unwrap();
            prop_assert!(b.net_profit > a.net_profit);
            prop_assert!(b.final_value > a.final_value);
        }

        #[test]
        fn roi_percentage_is_scale_invariant(initial in 100.0_f64..1e7, scale in 0.1_f64..100.0) {
            let base = InvestmentTerms { initial_investment: initial, ..sample_terms() };
            let scaled = InvestmentTerms { initial_investment: initial * scale, ..sample_terms() };
            let country = country_with_rate("XA", 21.0);

            let a = calc(&base, &country).unwrap();
            let b = calc(&scaled, &country).unwrap();
            prop_assert!((a.roi_percentage - b.roi_percentage).abs() < 1e-6);
            prop_assert!((a.after_tax_roi - b.after_tax_roi).abs() < 1e-6);
        }

        #[test]
        fn annualized_equals_roi_at_one_year(initial in 100.0_f64..1e6, seed in 0_u64..u64::MAX) {
            let terms = InvestmentTerms { initial_investment: initial, ..sample_terms() };
            let result = calculate(
                &terms,
                &sample_scenario(),
                &sample_mini(),
                &country_with_rate("XA", 21.0),
                RoiMode::RangeDerived,
                Volatility::Seeded(seed),
            ).unwrap();
            prop_assert!((result.annualized_roi - result.roi_percentage).abs() < 1e-6);
        }

        #[test]
        fn tax_is_never_negative_and_never_exceeds_profit(
            roi_min in -100.0_f64..100.0,
            spread in 0.0_f64..50.0,
            rate in 0.0_f64..50.0,
        ) {
            let mut mini = sample_mini();
            mini.typical_roi_min = roi_min;
            mini.typical_roi_max = roi_min + spread;
            let result = calculate(
                &sample_terms(),
                &sample_scenario(),
                &mini,
                &country_with_rate("XA", rate),
                RoiMode::RangeDerived,
                Volatility::Disabled,
            ).unwrap();

            prop_assert!(result.tax_amount >= 0.0);
            if result.net_profit > 0.0 {
                prop_assert!(result.tax_amount <= result.net_profit);
            } else {
                prop_assert!(result.tax_amount == 0.0);
            }
        }

        #[test]
        fn risk_score_stays_in_band(
            investment in 1.0_f64..1e7,
            gdp in 0.0_f64..100_000.0,
            ease in 1_u32..200,
            corruption in 0.0_f64..100.0,
        ) {
            let mut country = country_with_rate("XA", 21.0);
            country.gdp_per_capita = gdp;
            country.ease_of_business_rank = ease;
            country.corruption_index = corruption;
            for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
                let mut scenario = sample_scenario();
                scenario.risk_tier = tier;
                let score = risk_score(&scenario, &country, investment);
                prop_assert!((0.0..=10.0).contains(&score));
            }
        }

        #[test]
        fn risk_factors_stay_in_unit_interval(
            investment in 0.0_f64..1e7,
            gdp in 0.0_f64..100_000.0,
            ease in 1_u32..200,
        ) {
            let mut country = country_with_rate("XA", 21.0);
            country.gdp_per_capita = gdp;
            country.ease_of_business_rank = ease;
            let assessment = assess_risk(&sample_scenario(), &country, investment);
            for factor in [
                assessment.market_risk,
                assessment.operational_risk,
                assessment.financial_risk,
                assessment.regulatory_risk,
                assessment.competition_risk,
                assessment.overall_risk_score,
            ] {
                prop_assert!((0.0..=1.0).contains(&factor));
            }
        }
    }
}
