// Aggregator - tidy rows into one point per date
use crate::domain::event::{EventDescriptor, Reduction};
use crate::domain::series::{SeriesPoint, TidyRow};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Groups rows by date and reduces each group to a count (default) or to the
/// mean of the row values (GST Kp index). BTreeMap iteration gives the
/// ascending, duplicate-free date order; dates with no rows stay absent.
pub fn aggregate(rows: &[TidyRow], descriptor: &EventDescriptor) -> Vec<SeriesPoint> {
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.date).or_insert((0.0, 0));
        entry.0 += row.value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| {
            let value = match descriptor.reduction {
                Reduction::Count => count as f64,
                Reduction::Mean => sum / count as f64,
            };
            SeriesPoint { date, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rows_on(dates: &[NaiveDate]) -> Vec<TidyRow> {
        dates.iter().map(|d| TidyRow::new(*d, 1.0)).collect()
    }

    #[test]
    fn test_count_reduction_groups_by_date() {
        let d1 = date(2024, 4, 1);
        let d2 = date(2024, 4, 3);
        let rows = rows_on(&[d2, d1, d1, d2, d1]);
        let series = aggregate(&rows, EventKind::Cme.descriptor());
        assert_eq!(
            series,
            vec![
                SeriesPoint { date: d1, value: 3.0 },
                SeriesPoint { date: d2, value: 2.0 },
            ]
        );
    }

    #[test]
    fn test_mean_reduction_for_kp_index() {
        let d1 = date(2024, 4, 1);
        let d2 = date(2024, 4, 2);
        let rows = vec![
            TidyRow::new(d1, 3.0),
            TidyRow::new(d1, 5.0),
            TidyRow::new(d2, 7.0),
        ];
        let series = aggregate(&rows, EventKind::Gst.descriptor());
        assert_eq!(
            series,
            vec![
                SeriesPoint { date: d1, value: 4.0 },
                SeriesPoint { date: d2, value: 7.0 },
            ]
        );
    }

    #[test]
    fn test_dates_strictly_increasing_without_gap_fill() {
        let rows = rows_on(&[
            date(2024, 1, 9),
            date(2024, 1, 2),
            date(2024, 1, 2),
            date(2024, 1, 5),
            date(2024, 1, 9),
            date(2024, 1, 9),
        ]);
        let series = aggregate(&rows, EventKind::Flr.descriptor());
        // Three distinct dates; the gaps between them are left as gaps
        assert_eq!(series.len(), 3);
        for pair in series.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_empty_rows_give_empty_series() {
        assert!(aggregate(&[], EventKind::Sep.descriptor()).is_empty());
    }
}
