//! Asset lifecycle computation and multi-year replacement forecasting.
//!
//! Converts an install date and expected lifespan into age, remaining life,
//! percent consumed, and the forecast year in which replacement falls due,
//! then groups assets into per-year cost buckets for capital planning.
//!
//! Incomplete asset records (missing install date or zero lifespan) produce an
//! all-zero status rather than an error; the forecast is best-effort over
//! whatever the data layer handed over.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::whole_years_between;

/// Derived lifecycle view of one asset, as of an injected reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LifecycleStatus {
    /// Age in whole years as of the reference date.
    pub age_years: u32,
    /// Lifespan minus age, floored at 0.
    pub remaining_years: u32,
    /// Calendar year in which replacement falls due (reference year + remaining).
    pub replacement_year: i32,
    /// Share of the lifespan consumed, capped at 100.
    pub percent_used: f64,
    /// False when install date or lifespan was missing; derived fields are
    /// zeroed and the asset is excluded from forecasting.
    pub known: bool,
}

impl LifecycleStatus {
    /// Remaining life exhausted — replacement is due now or overdue.
    pub fn is_critical(&self) -> bool {
        self.known && self.remaining_years == 0
    }

    /// Replacement falls due within the next `window_years` years.
    pub fn is_due_soon(&self, window_years: u32) -> bool {
        self.known && self.remaining_years <= window_years
    }
}

/// Compute the lifecycle view of one asset.
///
/// `as_of` is always injected by the caller — the engine never reads a system
/// clock, so results are deterministic and testable without time mocking.
/// A missing install date or zero lifespan yields an all-zero status with
/// `known: false` rather than an error.
pub fn compute_lifecycle(
    install_date: Option<NaiveDate>,
    lifespan_years: u32,
    as_of: NaiveDate,
) -> LifecycleStatus {
    let Some(install) = install_date else {
        return LifecycleStatus::default();
    };
    if lifespan_years == 0 {
        return LifecycleStatus::default();
    }

    let age_years = whole_years_between(install, as_of);
    let remaining_years = lifespan_years.saturating_sub(age_years);
    let percent_used = (100.0 * age_years as f64 / lifespan_years as f64).min(100.0);

    LifecycleStatus {
        age_years,
        remaining_years,
        replacement_year: as_of.year() + remaining_years as i32,
        percent_used,
        known: true,
    }
}

/// A plain asset record handed over by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,
    pub install_date: Option<NaiveDate>,
    pub lifespan_years: u32,
    pub replacement_cost: f64,
}

/// One year of the capital-planning forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBucket {
    pub year: i32,
    /// Names of the assets due for replacement in this year.
    pub assets: Vec<String>,
    /// Summed replacement cost for the year.
    pub total_cost: f64,
}

/// Group assets into per-year replacement buckets over an N-year horizon.
///
/// One bucket per year in `[as_of.year(), as_of.year() + horizon_years]`,
/// inclusive both ends, emitted even when empty so the forecast table renders
/// every year. Each asset whose replacement year falls in the horizon lands in
/// exactly one bucket; assets with incomplete records are skipped.
pub fn forecast_buckets(
    assets: &[AssetRecord],
    horizon_years: u32,
    as_of: NaiveDate,
) -> Vec<ForecastBucket> {
    let first_year = as_of.year();
    let last_year = first_year + horizon_years as i32;

    let mut buckets: Vec<ForecastBucket> = (first_year..=last_year)
        .map(|year| ForecastBucket {
            year,
            assets: Vec::new(),
            total_cost: 0.0,
        })
        .collect();

    for asset in assets {
        let status = compute_lifecycle(asset.install_date, asset.lifespan_years, as_of);
        if !status.known {
            continue;
        }
        let year = status.replacement_year;
        if year < first_year || year > last_year {
            continue;
        }
        let bucket = &mut buckets[(year - first_year) as usize];
        bucket.assets.push(asset.name.clone());
        bucket.total_cost += asset.replacement_cost;
    }

    buckets
}
