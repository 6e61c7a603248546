use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySummary {
    pub this_month_credits: f64,
    /// Sum of non-positive amounts, so this is zero or negative.
    pub this_month_debits: f64,
    pub last_month_credits: f64,
    pub last_month_debits: f64,
    pub credit_percent_change: f64,
    pub debit_percent_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthBucket {
    ThisMonth,
    LastMonth,
    Outside,
}

/// Percent change from `old` to `new`; 100 when starting from zero.
pub fn percent_change(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        if new == 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        (new - old) / old * 100.0
    }
}

/// Midnight on the first day of this month and of the month before.
fn month_starts(reference: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let this_start = reference.with_day(1).unwrap_or(reference);
    let last_start = this_start
        .checked_sub_months(Months::new(1))
        .unwrap_or(this_start);
    (
        this_start.and_time(chrono::NaiveTime::MIN),
        last_start.and_time(chrono::NaiveTime::MIN),
    )
}

/// Which month a timestamp falls into relative to `reference`. Timestamps after
/// the reference date still count as this month.
pub fn bucket(reference: NaiveDate, timestamp: NaiveDateTime) -> MonthBucket {
    let (this_start, last_start) = month_starts(reference);
    if timestamp >= this_start {
        MonthBucket::ThisMonth
    } else if timestamp >= last_start {
        MonthBucket::LastMonth
    } else {
        MonthBucket::Outside
    }
}

pub fn compute_monthly_summary(reference: NaiveDate, transactions: &[Transaction]) -> MonthlySummary {
    let mut s = MonthlySummary::default();
    for txn in transactions {
        let (credits, debits) = match bucket(reference, txn.date) {
            MonthBucket::ThisMonth => (&mut s.this_month_credits, &mut s.this_month_debits),
            MonthBucket::LastMonth => (&mut s.last_month_credits, &mut s.last_month_debits),
            MonthBucket::Outside => continue,
        };
        if txn.amount > 0.0 {
            *credits += txn.amount;
        } else {
            *debits += txn.amount;
        }
    }
    s.credit_percent_change = percent_change(s.last_month_credits, s.this_month_credits);
    s.debit_percent_change = percent_change(s.last_month_debits, s.this_month_debits);
    s
}

/// Lifetime totals behind the trends advice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlook {
    pub credits: f64,
    pub debits: f64,
}

impl Outlook {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (credits, debits) = transactions.iter().fold((0.0, 0.0), |(c, d), t| {
            if t.amount > 0.0 {
                (c + t.amount, d)
            } else {
                (c, d + t.amount)
            }
        });
        Self { credits, debits }
    }

    pub fn is_saving(&self) -> bool {
        self.credits.abs() > self.debits.abs()
    }

    pub fn advice(&self) -> &'static str {
        if self.is_saving() {
            "Good! You are making more than you spend. It is recommended that you take \
             50% of your extra income and place it into investment opportunities, and use the \
             other 50% for a normal Savings account in the need of an emergency."
        } else {
            "Oh no! You are spending more than you make. It is recommended that you cut back \
             on food/drink costs, transportation, or utilities. Try to get a deal from your internet \
             company or avoid the Starbucks latte on the way to work or use a subway train."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::store::queries::parse_timestamp;

    fn txn(id: i64, date: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            name: format!("t{id}"),
            amount,
            category: Category::Shopping,
            date: parse_timestamp(date).unwrap(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_percent_change_rules() {
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(0.0, 42.0), 100.0);
        assert_eq!(percent_change(0.0, -3.0), 100.0);
        assert_eq!(percent_change(200.0, 300.0), 50.0);
        assert_eq!(percent_change(200.0, 100.0), -50.0);
        assert_eq!(percent_change(-100.0, -50.0), -50.0);
    }

    #[test]
    fn test_percent_change_matches_formula_on_grid() {
        for old in [-250.0, -1.5, 0.5, 10.0, 999.99] {
            for new in [-80.0, 0.0, 3.25, 10.0, 1200.0] {
                let expected = (new - old) / old * 100.0;
                assert!((percent_change(old, new) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        let reference = day("2025-06-15");
        assert_eq!(bucket(reference, parse_timestamp("2025-06-01 00:00:00").unwrap()), MonthBucket::ThisMonth);
        assert_eq!(bucket(reference, parse_timestamp("2025-05-31 23:59:59").unwrap()), MonthBucket::LastMonth);
        assert_eq!(bucket(reference, parse_timestamp("2025-05-01 00:00:00").unwrap()), MonthBucket::LastMonth);
        assert_eq!(bucket(reference, parse_timestamp("2025-04-30 23:59:59").unwrap()), MonthBucket::Outside);
        assert_eq!(bucket(reference, parse_timestamp("2025-07-04 12:00:00").unwrap()), MonthBucket::ThisMonth);
    }

    #[test]
    fn test_bucket_across_year_boundary() {
        let reference = day("2025-01-10");
        assert_eq!(bucket(reference, parse_timestamp("2024-12-31").unwrap()), MonthBucket::LastMonth);
        assert_eq!(bucket(reference, parse_timestamp("2024-11-30").unwrap()), MonthBucket::Outside);
    }

    #[test]
    fn test_summary_splits_credits_and_debits() {
        let txns = vec![
            txn(1, "2025-06-02", 1000.0),
            txn(2, "2025-06-03", -200.0),
            txn(3, "2025-06-04", 0.0),
            txn(4, "2025-05-10", 500.0),
            txn(5, "2025-05-11", -400.0),
            txn(6, "2025-03-01", 9999.0),
        ];
        let s = compute_monthly_summary(day("2025-06-20"), &txns);
        assert_eq!(s.this_month_credits, 1000.0);
        assert_eq!(s.this_month_debits, -200.0);
        assert_eq!(s.last_month_credits, 500.0);
        assert_eq!(s.last_month_debits, -400.0);
        assert_eq!(s.credit_percent_change, 100.0);
        assert_eq!(s.debit_percent_change, -50.0);
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover_input() {
        let reference = day("2025-06-10");
        let txns: Vec<Transaction> = (0..90)
            .map(|i| {
                let d = day("2025-03-15") + chrono::Duration::days(i);
                let amount = if i % 3 == 0 { 10.0 * i as f64 } else { -(i as f64) };
                txn(i, &d.format("%Y-%m-%d").to_string(), amount)
            })
            .collect();
        let mut counts = [0usize; 3];
        for t in &txns {
            match bucket(reference, t.date) {
                MonthBucket::ThisMonth => counts[0] += 1,
                MonthBucket::LastMonth => counts[1] += 1,
                MonthBucket::Outside => counts[2] += 1,
            }
        }
        assert_eq!(counts.iter().sum::<usize>(), txns.len());

        // Summary totals equal the sums of the two in-range partitions.
        let s = compute_monthly_summary(reference, &txns);
        let in_bucket = |b: MonthBucket| txns.iter().filter(move |t| bucket(reference, t.date) == b);
        let this_total: f64 = in_bucket(MonthBucket::ThisMonth).map(|t| t.amount).sum();
        let last_total: f64 = in_bucket(MonthBucket::LastMonth).map(|t| t.amount).sum();
        assert!((s.this_month_credits + s.this_month_debits - this_total).abs() < 1e-6);
        assert!((s.last_month_credits + s.last_month_debits - last_total).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input_gives_zero_summary() {
        assert_eq!(compute_monthly_summary(day("2025-06-10"), &[]), MonthlySummary::default());
    }

    #[test]
    fn test_outlook_advice() {
        let saving = Outlook::from_transactions(&[txn(1, "2025-01-01", 100.0), txn(2, "2025-01-02", -40.0)]);
        assert!(saving.is_saving());
        assert!(saving.advice().starts_with("Good!"));

        let spending = Outlook::from_transactions(&[txn(1, "2025-01-01", 100.0), txn(2, "2025-01-02", -100.0)]);
        assert!(!spending.is_saving());
        assert!(spending.advice().starts_with("Oh no!"));
    }
}
