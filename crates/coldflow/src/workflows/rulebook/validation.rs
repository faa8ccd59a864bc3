use super::RuleBook;

pub(crate) const RATIO_TOLERANCE: f64 = 1e-9;

/// Collects every invariant violation instead of stopping at the first.
pub(super) fn collect_violations(book: &RuleBook) -> Vec<String> {
    let mut errors = Vec::new();
    check_zones(book, &mut errors);
    check_coefficients(book, &mut errors);
    check_thresholds(book, &mut errors);
    check_viscosity(book, &mut errors);
    errors
}

fn check_zones(book: &RuleBook, errors: &mut Vec<String>) {
    if book.zones.is_empty() {
        errors.push("zones: at least one temperature zone is required".to_string());
        return;
    }

    for pair in book.zones.windows(2) {
        let (warmer, colder) = (&pair[0], &pair[1]);
        if colder.band <= warmer.band {
            errors.push(format!(
                "zones: band {:?} must be colder than the preceding {:?}",
                colder.band, warmer.band
            ));
        }
        if colder.upper_bound_c >= warmer.upper_bound_c {
            errors.push(format!(
                "zones: upper bound {} of '{}' must be colder than {} of '{}'",
                colder.upper_bound_c,
                colder.rule.zone_name,
                warmer.upper_bound_c,
                warmer.rule.zone_name
            ));
        }
        if colder.rule.energy_coeff < warmer.rule.energy_coeff {
            errors.push(format!(
                "zones: energy_coeff {:.2} of '{}' drops below {:.2} of warmer '{}'",
                colder.rule.energy_coeff,
                colder.rule.zone_name,
                warmer.rule.energy_coeff,
                warmer.rule.zone_name
            ));
        }
    }

    for entry in &book.zones {
        let rule = &entry.rule;
        let name = &rule.zone_name;

        if !entry.upper_bound_c.is_finite() {
            errors.push(format!("zones.{name}: upper bound must be finite"));
        }
        if rule.ratio.is_empty() {
            errors.push(format!("zones.{name}: ratio must list at least one material"));
        }
        if rule
            .ratio
            .iter()
            .any(|share| !share.fraction.is_finite() || share.fraction < 0.0)
        {
            errors.push(format!("zones.{name}: ratio fractions must be non-negative"));
        }
        let total = rule.ratio_total();
        if (total - 1.0).abs() > RATIO_TOLERANCE {
            errors.push(format!(
                "zones.{name}: ratio fractions sum to {total:.6}, expected 1.0"
            ));
        }
        if !rule.rpm_range.is_ordered() {
            errors.push(format!(
                "zones.{name}: rpm_range min ({}) exceeds max ({})",
                rule.rpm_range.min, rule.rpm_range.max
            ));
        }
        if !rule.power_range.is_ordered() {
            errors.push(format!(
                "zones.{name}: power_range min ({}) exceeds max ({})",
                rule.power_range.min, rule.power_range.max
            ));
        }
        if !(rule.energy_coeff.is_finite() && rule.energy_coeff > 0.0) {
            errors.push(format!(
                "zones.{name}: energy_coeff must be positive (found {})",
                rule.energy_coeff
            ));
        }
    }
}

fn check_coefficients(book: &RuleBook, errors: &mut Vec<String>) {
    if !book.unoptimized_coefficient.is_finite() {
        errors.push("unoptimized_coefficient must be finite".to_string());
        return;
    }

    for entry in &book.zones {
        if entry.rule.energy_coeff >= book.unoptimized_coefficient {
            errors.push(format!(
                "unoptimized_coefficient ({:.2}) must exceed energy_coeff {:.2} of '{}'",
                book.unoptimized_coefficient, entry.rule.energy_coeff, entry.rule.zone_name
            ));
        }
    }
}

fn check_thresholds(book: &RuleBook, errors: &mut Vec<String>) {
    for (field, value) in book.thresholds.non_negative_fields() {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!(
                "thresholds.{field} must be a non-negative number (found {value})"
            ));
        }
    }
}

fn check_viscosity(book: &RuleBook, errors: &mut Vec<String>) {
    let viscosity = &book.viscosity;
    if !(viscosity.step_mpa_s.is_finite() && viscosity.step_mpa_s > 0.0) {
        errors.push(format!(
            "viscosity.step_mpa_s must be positive (found {})",
            viscosity.step_mpa_s
        ));
    }
    if !(viscosity.max_speed_rpm.is_finite() && viscosity.max_speed_rpm > 0.0) {
        errors.push(format!(
            "viscosity.max_speed_rpm must be positive (found {})",
            viscosity.max_speed_rpm
        ));
    }
    if !viscosity.baseline_mpa_s.is_finite() || viscosity.baseline_mpa_s < 0.0 {
        errors.push("viscosity.baseline_mpa_s must be non-negative".to_string());
    }
    if !viscosity.speed_per_step_rpm.is_finite() || viscosity.speed_per_step_rpm < 0.0 {
        errors.push("viscosity.speed_per_step_rpm must be non-negative".to_string());
    }
}
