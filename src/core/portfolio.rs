use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::types::PeriodRecord;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct PortfolioCell {
    pub paid: f64,
    pub savings: f64,
    pub theoretical_cost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioYear {
    pub year: i32,
    pub plants: BTreeMap<u32, PortfolioCell>,
    pub totals: PortfolioCell,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioSummary {
    pub years: Vec<PortfolioYear>,
    pub totals: PortfolioCell,
    pub reduction_pct: f64,
}

// Canonical cost-without-solar reconstruction: what was paid plus what solar
// saved. Every cell and total uses this one formula.
fn close_cell(paid: f64, savings: f64) -> PortfolioCell {
    PortfolioCell {
        paid,
        savings,
        theoretical_cost: paid + savings,
    }
}

pub fn consolidate(records: &[PeriodRecord]) -> PortfolioSummary {
    let mut plant_ids: BTreeSet<u32> = BTreeSet::new();
    let mut accumulated: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for record in records {
        plant_ids.insert(record.plant_id);
        let entry = accumulated.entry((record.year, record.plant_id)).or_insert((0.0, 0.0));
        entry.0 += record.billed;
        entry.1 += record.savings;
    }

    let year_keys: BTreeSet<i32> = accumulated.keys().map(|(year, _)| *year).collect();

    let mut years = Vec::with_capacity(year_keys.len());
    let mut grand_paid = 0.0;
    let mut grand_savings = 0.0;
    for year in year_keys {
        let mut plants = BTreeMap::new();
        let mut year_paid = 0.0;
        let mut year_savings = 0.0;
        // Plants with no history in this year still get a zero cell so the
        // cross-tab stays rectangular.
        for &plant_id in &plant_ids {
            let (paid, savings) = accumulated
                .get(&(year, plant_id))
                .copied()
                .unwrap_or((0.0, 0.0));
            year_paid += paid;
            year_savings += savings;
            plants.insert(plant_id, close_cell(paid, savings));
        }
        grand_paid += year_paid;
        grand_savings += year_savings;
        years.push(PortfolioYear {
            year,
            plants,
            totals: close_cell(year_paid, year_savings),
        });
    }

    let totals = close_cell(grand_paid, grand_savings);
    let reduction_pct = if totals.theoretical_cost > 0.0 {
        (1.0 - totals.paid / totals.theoretical_cost) * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        years,
        totals,
        reduction_pct,
    }
}
