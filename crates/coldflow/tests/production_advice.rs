use coldflow::workflows::production::{
    ProductionError, ProductionOptimizer, ProductionOutcome, ZoneRuleResolver,
};
use coldflow::workflows::rulebook::{RuleBook, TemperatureBand, CRUDE_OIL, DILUENT};

fn zone_name(book: &RuleBook, temperature_c: f64) -> Option<String> {
    ZoneRuleResolver::new(book)
        .resolve(temperature_c)
        .rule()
        .map(|rule| rule.zone_name.clone())
}

#[test]
fn resolver_keeps_boundaries_in_the_colder_band() {
    let book = RuleBook::standard();
    let resolver = ZoneRuleResolver::new(&book);

    assert_eq!(resolver.resolve(-10.0).band(), Some(TemperatureBand::Cold));
    assert_eq!(resolver.resolve(-20.0).band(), Some(TemperatureBand::Severe));
    assert_eq!(resolver.resolve(-30.0).band(), Some(TemperatureBand::Extreme));
    assert_eq!(zone_name(&book, -9.99).as_deref(), Some("-5~-10℃"));
    assert_eq!(zone_name(&book, -4.0), None);
}

#[test]
fn severe_cold_recommendation_matches_field_rules() {
    let book = RuleBook::standard();
    let optimizer = ProductionOptimizer::new(&book, -25.0);

    let outcome = optimizer.optimize_process(2500.0).expect("valid viscosity");
    let recommendation = outcome.recommendation().expect("zone resolved");

    assert_eq!(recommendation.zone_name, "-20~-30℃");
    assert_eq!(recommendation.base_speed_rpm, 42.5);
    assert_eq!(recommendation.final_speed_rpm, 57.5);
    assert_eq!(recommendation.projected_power_kw, 30.0);
    assert_eq!(recommendation.energy_coeff, 1.48);
    assert_eq!(
        recommendation
            .ratio
            .iter()
            .find(|share| share.material == DILUENT)
            .map(|share| share.fraction),
        Some(0.06)
    );
    assert_eq!(optimizer.calculate_savings(1000.0), Ok(320.0));
}

#[test]
fn warm_weather_short_circuits_both_operations() {
    let book = RuleBook::standard();
    let optimizer = ProductionOptimizer::new(&book, 4.5);

    assert!(matches!(
        optimizer.optimize_process(2500.0),
        Ok(ProductionOutcome::NotApplicable { .. })
    ));
    assert!(matches!(
        optimizer.calculate_savings(1000.0),
        Err(ProductionError::ZoneNotResolved { .. })
    ));
}

#[test]
fn injected_rulebook_changes_results_without_code_changes() {
    let mut book = RuleBook::standard();
    book.viscosity.max_speed_rpm = 50.0;
    book.unoptimized_coefficient = 2.0;
    book.validate().expect("still valid");

    let optimizer = ProductionOptimizer::new(&book, -25.0);
    let outcome = optimizer.optimize_process(2500.0).expect("valid viscosity");

    assert_eq!(
        outcome.recommendation().map(|r| r.final_speed_rpm),
        Some(50.0)
    );
    assert_eq!(optimizer.calculate_savings(1000.0), Ok(520.0));
}

#[test]
fn every_zone_blend_is_led_by_crude_oil() {
    let book = RuleBook::standard();
    for entry in &book.zones {
        let crude = entry
            .rule
            .ratio
            .iter()
            .find(|share| share.material == CRUDE_OIL)
            .map(|share| share.fraction)
            .expect("crude share");
        assert!(crude >= 0.85, "{} crude share {crude}", entry.rule.zone_name);
        assert!((entry.rule.ratio_total() - 1.0).abs() < 1e-9);
    }
}
