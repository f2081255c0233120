// File: crates/demo/src/data.rs
// Summary: Demo data sources: random measurements (tap scaffolding) and CSV loading.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{MeasureKind, Measurement, Series, Timestamp};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use tracing::{info, warn};

/// Range the tap gesture draws values from.
pub const VALUE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Display timestamp for the `index`-th sample, one minute apart from `base`.
pub fn timestamp_for(base: NaiveDateTime, index: usize) -> Timestamp {
    let at = base + Duration::minutes(index as i64);
    Timestamp::new(at.format("%H:%M").to_string(), at.format("%d").to_string())
}

pub fn random_measurement<R: Rng>(rng: &mut R, base: NaiveDateTime, index: usize) -> Measurement {
    Measurement::measure(Some(rng.gen_range(VALUE_RANGE))).with_timestamp(timestamp_for(base, index))
}

pub fn random_series<R: Rng>(rng: &mut R, base: NaiveDateTime, count: usize) -> Series {
    Series::from_measurements((0..count).map(|i| random_measurement(rng, base, i)).collect())
}

/// Prepend initial/target entries to a series of measures.
pub fn with_references(series: Series, initial: Option<f64>, target: Option<f64>) -> Series {
    let refs = [initial.map(|v| Measurement::initial(Some(v))), target.map(|v| Measurement::target(Some(v)))];
    let items = refs.into_iter().flatten().chain(series.iter().cloned()).collect();
    Series::from_measurements(items)
}

/// Load a series from CSV.
///
/// Requires a `value` column (an empty cell is a gap). Optional `kind`
/// (`measure`/`initial`/`target`), `time` and `date` columns.
pub fn load_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_value = idx(&["value", "measure", "y"]).context("CSV needs a `value` column")?;
    let i_kind = idx(&["kind", "type"]);
    let i_time = idx(&["time"]);
    let i_date = idx(&["date"]);

    let mut items = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let cell = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("");

        let raw = cell(Some(i_value));
        let value = if raw.is_empty() {
            None
        } else {
            match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(row = row + 1, raw, "unparseable value, treating as a gap");
                    None
                }
            }
        };
        let kind = match cell(i_kind).to_lowercase().as_str() {
            "initial" => MeasureKind::Initial,
            "target" => MeasureKind::Target,
            "" | "measure" => MeasureKind::Measure,
            other => {
                warn!(row = row + 1, kind = other, "unknown kind, skipping row");
                continue;
            }
        };
        items.push(Measurement {
            value,
            kind,
            sequence_id: 0,
            timestamp: Timestamp::new(cell(i_time), cell(i_date)),
        });
    }
    info!(rows = items.len(), path = %path.display(), "loaded CSV series");
    Ok(Series::from_measurements(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2022, 7, 23)
            .and_then(|d| d.and_hms_opt(1, 0, 0))
            .unwrap()
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_series(&mut rng, base(), 200);
        assert_eq!(s.measure_count(), 200);
        assert!(s.measures().into_iter().flatten().all(|v| VALUE_RANGE.contains(&v)));
        assert_eq!(s.as_slice()[61].timestamp, Timestamp::new("02:01", "23"));
    }

    #[test]
    fn references_go_first_and_do_not_add_columns() {
        let s = with_references(Series::from_values([Some(1.0), Some(2.0)]), Some(10.0), None);
        assert_eq!(s.len(), 3);
        assert_eq!(s.measure_count(), 2);
        assert_eq!(s.initial().and_then(|m| m.value), Some(10.0));
        assert!(s.target().is_none());
    }

    #[test]
    fn csv_rows_with_gaps_and_kinds() {
        let dir = std::env::temp_dir().join("linechart-demo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        std::fs::write(&path, "Value,Kind,Time\n12.5,,01:00\n,measure,01:01\n80,target,\nabc,,\n3,bogus,\n").unwrap();

        let s = load_csv(&path).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.measures(), vec![Some(12.5), None, None]);
        assert_eq!(s.target().and_then(|m| m.value), Some(80.0));
        assert_eq!(s.as_slice()[0].timestamp.time, "01:00");
    }
}
