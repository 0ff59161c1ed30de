//! Volume sampling over recent index sizes

use super::size::normalize;
use crate::error::{PlannerError, PlannerResult};
use crate::models::IndexSizeRecord;

/// Sum the normalized sizes (GiB) of the first `window` records
///
/// Records are taken in the order given. The caller clamps `window` to
/// `records.len()`; a larger window simply sums every record.
pub fn sum_recent_volumes(records: &[IndexSizeRecord], window: usize) -> PlannerResult<f64> {
    records.iter().take(window).try_fold(0.0, |total, record| -> PlannerResult<f64> {
        let raw = record.primary_store_size.as_deref().ok_or_else(|| {
            PlannerError::UnparsableSize(format!("<missing> ({})", record.index_name))
        })?;
        Ok(total + normalize(raw)?)
    })
}

/// Average daily volume over the configured window
///
/// The divisor is always the configured window, even when fewer records were
/// available to sum. With three records and a seven-day window the average is
/// the three-record total divided by seven.
pub fn average_daily_volume(total_gib: f64, configured_window_days: u32) -> f64 {
    total_gib / f64::from(configured_window_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(sizes: &[&str]) -> Vec<IndexSizeRecord> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, size)| IndexSizeRecord::new(format!("logs_{}", i), *size))
            .collect()
    }

    #[test]
    fn test_sums_only_window() {
        let recs = records(&["10gb", "20gb", "30gb", "1000gb"]);
        assert_eq!(sum_recent_volumes(&recs, 3).unwrap(), 60.0);
    }

    #[test]
    fn test_mixed_units() {
        let recs = records(&["1gb", "1024mb", "1048576kb"]);
        assert_eq!(sum_recent_volumes(&recs, 3).unwrap(), 3.0);
    }

    #[test]
    fn test_zero_window_is_zero() {
        let recs = records(&["10gb"]);
        assert_eq!(sum_recent_volumes(&recs, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_unparsable_inside_window_fails() {
        let recs = records(&["10gb", "oops"]);
        assert!(matches!(
            sum_recent_volumes(&recs, 2),
            Err(PlannerError::UnparsableSize(_))
        ));
    }

    #[test]
    fn test_unparsable_outside_window_ignored() {
        let mut recs = records(&["10gb", "5gb"]);
        recs.push(IndexSizeRecord {
            index_name: "closed".to_string(),
            primary_store_size: None,
        });
        assert_eq!(sum_recent_volumes(&recs, 2).unwrap(), 15.0);
    }

    #[test]
    fn test_average_uses_configured_divisor() {
        assert_eq!(average_daily_volume(280.0, 7), 40.0);
        assert_eq!(average_daily_volume(90.0, 7), 90.0 / 7.0);
    }
}
