use super::thresholds::{HardwareProfile, ThresholdConfig, ViscosityCompensation};
use super::zones::{ClosedRange, MaterialShare, TemperatureBand, ZoneEntry, ZoneRule};
use super::RuleBook;

pub const CRUDE_OIL: &str = "crude_oil";
pub const POUR_POINT_DEPRESSANT: &str = "pour_point_depressant";
pub const DILUENT: &str = "diluent";

pub(super) fn standard_rulebook() -> RuleBook {
    RuleBook {
        zones: standard_zones(),
        viscosity: ViscosityCompensation::default(),
        unoptimized_coefficient: 1.8,
        thresholds: standard_thresholds(),
        hardware: HardwareProfile::default(),
    }
}

fn standard_zones() -> Vec<ZoneEntry> {
    vec![
        zone(
            TemperatureBand::Mild,
            -5.0,
            "-5~-10℃",
            [0.92, 0.04, 0.04],
            (50.0, 55.0),
            (18.0, 20.0),
            1.10,
        ),
        zone(
            TemperatureBand::Cold,
            -10.0,
            "-10~-20℃",
            [0.90, 0.05, 0.05],
            (45.0, 50.0),
            (22.0, 25.0),
            1.25,
        ),
        zone(
            TemperatureBand::Severe,
            -20.0,
            "-20~-30℃",
            [0.88, 0.06, 0.06],
            (40.0, 45.0),
            (28.0, 32.0),
            1.48,
        ),
        zone(
            TemperatureBand::Extreme,
            -30.0,
            "below -30℃",
            [0.85, 0.07, 0.08],
            (35.0, 40.0),
            (35.0, 40.0),
            1.75,
        ),
    ]
}

fn zone(
    band: TemperatureBand,
    upper_bound_c: f64,
    zone_name: &str,
    [crude, depressant, diluent]: [f64; 3],
    (rpm_min, rpm_max): (f64, f64),
    (power_min, power_max): (f64, f64),
    energy_coeff: f64,
) -> ZoneEntry {
    ZoneEntry {
        band,
        upper_bound_c,
        rule: ZoneRule {
            zone_name: zone_name.to_string(),
            ratio: vec![
                MaterialShare::new(CRUDE_OIL, crude),
                MaterialShare::new(POUR_POINT_DEPRESSANT, depressant),
                MaterialShare::new(DILUENT, diluent),
            ],
            rpm_range: ClosedRange::new(rpm_min, rpm_max),
            power_range: ClosedRange::new(power_min, power_max),
            energy_coeff,
        },
    }
}

fn standard_thresholds() -> ThresholdConfig {
    ThresholdConfig {
        transport_distance_limit_km: 5.0,
        transport_loss_rate: 0.06,
        daily_start_limit: 2,
        start_loss_rate: 0.25,
        no_preheat_loss: 0.40,
        min_preheat_minutes: 30,
        gap_time_limit_min: 20.0,
        gap_loss_per_10min: 0.08,
    }
}
