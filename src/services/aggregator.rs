//! Reduces a window of transactions to sum/average/max/min/count.
//!
//! The caller is expected to have restricted the input to the window already;
//! the store query does that filtering.

use crate::models::transaction::{Transaction, TransactionStatistics};

/// Aggregate the amounts of `transactions`
///
/// An empty input yields all-zero statistics rather than a NaN average.
/// Max and min are seeded from the first amount, so all-negative windows
/// report the correct bounds.
pub fn aggregate(transactions: &[Transaction]) -> TransactionStatistics {
    aggregate_amounts(transactions.iter().map(|t| t.amount))
}

fn aggregate_amounts<I>(amounts: I) -> TransactionStatistics
where
    I: IntoIterator<Item = f64>,
{
    let mut amounts = amounts.into_iter();

    let Some(first) = amounts.next() else {
        return TransactionStatistics::default();
    };

    let mut stats = TransactionStatistics {
        sum: first,
        average: 0.0,
        max: first,
        min: first,
        count: 1,
    };

    for amount in amounts {
        stats.sum += amount;
        stats.max = stats.max.max(amount);
        stats.min = stats.min.min(amount);
        stats.count += 1;
    }

    stats.average = stats.sum / stats.count as f64;
    stats
}
