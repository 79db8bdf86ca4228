use climate_risk_engine::config::{EngineConfig, SimulationSettings};
use climate_risk_engine::models::RiskBand;
use climate_risk_engine::products::{assess_compliance, classify_heat, RiskLabel};
use climate_risk_engine::{
    ClimateScenario, PilotConfig, RiskEngine, TriggerDecision, TriggerThresholds,
    VulnerabilityProfile,
};

fn paris_scenario(persona: VulnerabilityProfile) -> ClimateScenario {
    ClimateScenario::new(1.5, 45, 15, persona)
}

fn severe_scenario(persona: VulnerabilityProfile) -> ClimateScenario {
    ClimateScenario::new(3.5, 150, 75, persona)
}

#[test]
fn test_assessment_covers_every_persona() {
    let engine = RiskEngine::new();
    for persona in VulnerabilityProfile::ALL {
        let assessment = engine.assess_scenario(&severe_scenario(persona)).unwrap();

        assert!(assessment.risk_multiplier >= 1.0);
        assert_eq!(assessment.projection.horizon(), 30);
        assert!(assessment.annual_loss_usd > 0.0);
        assert_eq!(
            assessment.risk_band,
            RiskBand::for_multiplier(assessment.risk_multiplier)
        );

        // Year indices are sequential from zero.
        for (index, year) in assessment.projection.years.iter().enumerate() {
            assert_eq!(year.year as usize, index);
        }
    }
}

#[test]
fn test_summary_matches_final_year() {
    let engine = RiskEngine::new();
    let assessment = engine
        .assess_scenario(&severe_scenario(VulnerabilityProfile::CoastalHomeowner))
        .unwrap();

    let summary = assessment.summary.expect("30-year projection has a summary");
    let last = assessment.projection.years.last().unwrap();
    assert!((summary.total_savings - (last.bau_total - last.resilient_total)).abs() < 1e-9);
    assert_eq!(summary.crossover_year, assessment.projection.crossover_year);
}

#[test]
fn test_identical_engines_agree() {
    let config = EngineConfig {
        simulation: SimulationSettings { horizon_years: 30, seed: 42 },
        trigger: TriggerThresholds::default(),
    };
    let scenario = severe_scenario(VulnerabilityProfile::SubsistenceFarmer);

    let first = RiskEngine::with_config(config).unwrap().assess_scenario(&scenario).unwrap();
    let second = RiskEngine::with_config(config).unwrap().assess_scenario(&scenario).unwrap();

    assert_eq!(first.risk_multiplier, second.risk_multiplier);
    assert_eq!(first.projection, second.projection);
}

#[test]
fn test_custom_horizon_is_honored() {
    let config = EngineConfig {
        simulation: SimulationSettings { horizon_years: 10, seed: 7 },
        trigger: TriggerThresholds::default(),
    };
    let engine = RiskEngine::with_config(config).unwrap();
    let assessment = engine
        .assess_scenario(&paris_scenario(VulnerabilityProfile::MountainCommunity))
        .unwrap();
    assert_eq!(assessment.projection.horizon(), 10);
}

#[test]
fn test_paris_scenario_is_calmer_than_severe() {
    let engine = RiskEngine::new();
    let persona = VulnerabilityProfile::CoastalHomeowner;
    let calm = engine.assess_scenario(&paris_scenario(persona)).unwrap();
    let severe = engine.assess_scenario(&severe_scenario(persona)).unwrap();

    assert!(calm.risk_multiplier < severe.risk_multiplier);
    assert!(calm.annual_loss_usd < severe.annual_loss_usd);
}

#[test]
fn test_pilot_evaluation_through_engine() {
    let engine = RiskEngine::new();
    let outcome = engine
        .evaluate_pilot(&PilotConfig::new(75_000.0, 100.0, 115, 85))
        .unwrap();

    // 115 mph at 85% confidence clears the partial tier only.
    assert_eq!(outcome.decision, TriggerDecision::PartialTrigger);
    assert_eq!(outcome.deployed_funds, 37_500.0);
    assert!(outcome.roi > 0.0);
}

#[test]
fn test_assessment_serializes_for_rendering() {
    let engine = RiskEngine::new();
    let assessment = engine
        .assess_scenario(&severe_scenario(VulnerabilityProfile::UrbanHeatIsland))
        .unwrap();

    let json = serde_json::to_value(&assessment).unwrap();
    assert!(json.get("risk_multiplier").is_some());
    assert!(json.get("projection").is_some());
    assert!(json.get("summary").is_some());
    assert_eq!(
        json["projection"]["years"].as_array().unwrap().len(),
        30
    );
}

#[test]
fn test_products_compose_with_assessment() {
    let engine = RiskEngine::new();
    let assessment = engine
        .assess_scenario(&severe_scenario(VulnerabilityProfile::WildlandInterface))
        .unwrap();

    // The listing label is driven by the assessed multiplier.
    let label = RiskLabel::from_multiplier(assessment.risk_multiplier);
    assert!(label.score <= 100);

    // The auxiliary products stand alone.
    let compliance = assess_compliance(85).unwrap();
    assert_eq!(compliance.premium_discount_pct, 25);
    let heat = classify_heat(108);
    assert_eq!(heat.households_at_risk, 450);
}
