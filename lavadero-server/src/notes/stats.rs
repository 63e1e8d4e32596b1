//! Per-business aggregate statistics
//!
//! Note counts and collected revenue bucketed by calendar month of the
//! note date. Revenue counts money actually received (sum of abonos),
//! not face totals.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::Note;

/// One month's aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStat {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub notes: u64,
    pub revenue: Decimal,
}

/// Bucket notes by month of their creation date, newest month first
pub fn compute_monthly(notes: &[Note]) -> Vec<MonthlyStat> {
    let mut buckets: Vec<MonthlyStat> = Vec::new();
    for note in notes {
        let (year, month) = (note.date.year(), note.date.month());
        let paid = note.paid_amount();
        match buckets.iter_mut().find(|b| b.year == year && b.month == month) {
            Some(bucket) => {
                bucket.notes += 1;
                bucket.revenue += paid;
            }
            None => buckets.push(MonthlyStat {
                year,
                month,
                notes: 1,
                revenue: paid,
            }),
        }
    }
    buckets.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    buckets
}
