use super::types::{FullPeriod, LegacyPeriod, PeriodRecord, RawPeriod, TariffConfig};

// Metering rounding slack before the energy split is considered inconsistent.
const SPLIT_TOLERANCE: f64 = 0.005;

pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

pub fn normalize_period(raw: &RawPeriod, tariff: &TariffConfig) -> PeriodRecord {
    match raw {
        RawPeriod::Full(full) => normalize_full(full),
        RawPeriod::Legacy(legacy) => normalize_legacy(legacy, tariff),
    }
}

pub fn normalize_all(raws: &[RawPeriod], tariff: &TariffConfig) -> Vec<PeriodRecord> {
    let mut records: Vec<PeriodRecord> = raws
        .iter()
        .map(|raw| normalize_period(raw, tariff))
        .collect();
    records.sort_by(|a, b| {
        (a.plant_id, a.year, a.month).cmp(&(b.plant_id, b.year, b.month))
    });
    records
}

fn normalize_full(full: &FullPeriod) -> PeriodRecord {
    let generated = finite_or_zero(full.generated_kwh).max(0.0);
    let self_consumed = finite_or_zero(full.self_consumed_kwh).clamp(0.0, generated);
    let mut exported = finite_or_zero(full.exported_kwh).max(0.0);
    if self_consumed + exported > generated * (1.0 + SPLIT_TOLERANCE) {
        exported = (generated - self_consumed).max(0.0);
    }

    PeriodRecord {
        plant_id: full.plant_id,
        year: full.year,
        month: full.month,
        generated_kwh: generated,
        self_consumed_kwh: self_consumed,
        exported_kwh: exported,
        billed: finite_or_zero(full.billed).max(0.0),
        savings: finite_or_zero(full.savings).max(0.0),
        export_income: finite_or_zero(full.export_income).max(0.0),
        balance: finite_or_zero(full.balance),
    }
}

// Older records only report generation, so the billing side is reconstructed
// from the configured average tariff. The whole month is treated as
// self-consumed: legacy meters never tracked the export split.
fn normalize_legacy(legacy: &LegacyPeriod, tariff: &TariffConfig) -> PeriodRecord {
    let generated = finite_or_zero(legacy.generated_kwh).max(0.0);
    let tariff_rate = finite_or_zero(tariff.average_tariff).max(0.0);
    let residual = finite_or_zero(tariff.residual_bill_ratio).max(0.0);
    let savings = finite_or_zero(generated * tariff_rate);

    PeriodRecord {
        plant_id: legacy.plant_id,
        year: legacy.year,
        month: legacy.month,
        generated_kwh: generated,
        self_consumed_kwh: generated,
        exported_kwh: 0.0,
        billed: finite_or_zero(savings * residual),
        savings,
        export_income: 0.0,
        balance: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn tariff() -> TariffConfig {
        TariffConfig {
            average_tariff: 850.0,
            residual_bill_ratio: 0.35,
        }
    }

    fn record_is_finite(record: &PeriodRecord) -> bool {
        [
            record.generated_kwh,
            record.self_consumed_kwh,
            record.exported_kwh,
            record.billed,
            record.savings,
            record.export_income,
            record.balance,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    #[test]
    fn legacy_record_reconstructs_billing_from_tariff() {
        let raw = RawPeriod::Legacy(LegacyPeriod {
            plant_id: 1,
            year: 2023,
            month: 7,
            generated_kwh: 1_000.0,
        });

        // savings = 1000 * 850 = 850_000; billed = 850_000 * 0.35 = 297_500
        let record = normalize_period(&raw, &tariff());
        assert_approx(record.savings, 850_000.0);
        assert_approx(record.billed, 297_500.0);
        assert_approx(record.self_consumed_kwh, 1_000.0);
        assert_approx(record.exported_kwh, 0.0);
        assert_approx(record.balance, 0.0);
    }

    #[test]
    fn full_record_passes_billing_fields_through() {
        let raw = RawPeriod::Full(FullPeriod {
            plant_id: 1,
            year: 2024,
            month: 2,
            generated_kwh: 60_000.0,
            self_consumed_kwh: 45_000.0,
            exported_kwh: 15_000.0,
            billed: 12_000_000.0,
            savings: 38_000_000.0,
            export_income: 4_500_000.0,
            balance: -1_200_000.0,
        });

        let record = normalize_period(&raw, &tariff());
        assert_approx(record.savings, 38_000_000.0);
        assert_approx(record.billed, 12_000_000.0);
        assert_approx(record.export_income, 4_500_000.0);
        assert_approx(record.balance, -1_200_000.0);
        assert_approx(record.exported_kwh, 15_000.0);
    }

    #[test]
    fn energy_split_clamps_when_exceeding_generation() {
        let raw = RawPeriod::Full(FullPeriod {
            plant_id: 1,
            year: 2024,
            month: 3,
            generated_kwh: 100.0,
            self_consumed_kwh: 80.0,
            exported_kwh: 50.0,
            billed: 0.0,
            savings: 0.0,
            export_income: 0.0,
            balance: 0.0,
        });

        let record = normalize_period(&raw, &tariff());
        assert_approx(record.exported_kwh, 20.0);
        assert!(record.self_consumed_kwh + record.exported_kwh <= record.generated_kwh + EPS);
    }

    #[test]
    fn energy_split_within_tolerance_is_left_alone() {
        let raw = RawPeriod::Full(FullPeriod {
            plant_id: 1,
            year: 2024,
            month: 4,
            generated_kwh: 1_000.0,
            self_consumed_kwh: 700.0,
            exported_kwh: 303.0,
            billed: 0.0,
            savings: 0.0,
            export_income: 0.0,
            balance: 0.0,
        });

        let record = normalize_period(&raw, &tariff());
        assert_approx(record.exported_kwh, 303.0);
    }

    #[test]
    fn untagged_period_without_billing_fields_parses_as_legacy() {
        let json = r#"{"plant_id": 2, "year": 2022, "month": 11, "generated_kwh": 480.5}"#;
        let raw: RawPeriod = serde_json::from_str(json).expect("legacy json should parse");
        assert!(matches!(raw, RawPeriod::Legacy(_)));

        let json = r#"{
            "plant_id": 2, "year": 2024, "month": 1,
            "generated_kwh": 480.5, "billed": 90000.0, "savings": 400000.0
        }"#;
        let raw: RawPeriod = serde_json::from_str(json).expect("full json should parse");
        assert!(matches!(raw, RawPeriod::Full(_)));
    }

    #[test]
    fn empty_legacy_record_normalizes_to_zeroes() {
        let json = r#"{"plant_id": 3, "year": 2021, "month": 1}"#;
        let raw: RawPeriod = serde_json::from_str(json).expect("minimal json should parse");
        let record = normalize_period(&raw, &tariff());
        assert!(record_is_finite(&record));
        assert_approx(record.savings, 0.0);
        assert_approx(record.billed, 0.0);
    }

    #[test]
    fn normalize_all_sorts_by_plant_then_period() {
        let raws = vec![
            RawPeriod::Legacy(LegacyPeriod {
                plant_id: 2,
                year: 2023,
                month: 1,
                generated_kwh: 10.0,
            }),
            RawPeriod::Legacy(LegacyPeriod {
                plant_id: 1,
                year: 2023,
                month: 6,
                generated_kwh: 10.0,
            }),
            RawPeriod::Legacy(LegacyPeriod {
                plant_id: 1,
                year: 2023,
                month: 2,
                generated_kwh: 10.0,
            }),
        ];

        let records = normalize_all(&raws, &tariff());
        let order: Vec<(u32, i32, u32)> = records
            .iter()
            .map(|r| (r.plant_id, r.year, r.month))
            .collect();
        assert_eq!(order, vec![(1, 2023, 2), (1, 2023, 6), (2, 2023, 1)]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_normalizer_never_emits_non_finite_fields(
            generated in any::<f64>(),
            self_consumed in any::<f64>(),
            exported in any::<f64>(),
            billed in any::<f64>(),
            savings in any::<f64>(),
            export_income in any::<f64>(),
            balance in any::<f64>(),
            tariff_rate in any::<f64>(),
            residual in any::<f64>()
        ) {
            let config = TariffConfig {
                average_tariff: tariff_rate,
                residual_bill_ratio: residual,
            };
            let full = RawPeriod::Full(FullPeriod {
                plant_id: 1,
                year: 2024,
                month: 1,
                generated_kwh: generated,
                self_consumed_kwh: self_consumed,
                exported_kwh: exported,
                billed,
                savings,
                export_income,
                balance,
            });
            let legacy = RawPeriod::Legacy(LegacyPeriod {
                plant_id: 1,
                year: 2024,
                month: 1,
                generated_kwh: generated,
            });

            prop_assert!(record_is_finite(&normalize_period(&full, &config)));
            prop_assert!(record_is_finite(&normalize_period(&legacy, &config)));
        }

        #[test]
        fn prop_energy_split_invariant_holds_after_normalization(
            generated in 0.0f64..1_000_000.0,
            self_consumed in 0.0f64..1_500_000.0,
            exported in 0.0f64..1_500_000.0
        ) {
            let full = RawPeriod::Full(FullPeriod {
                plant_id: 1,
                year: 2024,
                month: 1,
                generated_kwh: generated,
                self_consumed_kwh: self_consumed,
                exported_kwh: exported,
                billed: 0.0,
                savings: 0.0,
                export_income: 0.0,
                balance: 0.0,
            });

            let record = normalize_period(&full, &tariff());
            prop_assert!(
                record.self_consumed_kwh + record.exported_kwh
                    <= record.generated_kwh * (1.0 + SPLIT_TOLERANCE) + 1e-9
            );
        }
    }
}
