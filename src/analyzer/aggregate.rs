use crate::model::{Bin, PriceBucket, SaleRecord};
use std::collections::BTreeMap;

/// Sums the `sold` indicator per interval. Rows without an interval are
/// skipped; an interval shows up as soon as one row falls into it, even if
/// every `sold` cell there is missing (the sum is then 0). Intervals nobody
/// fell into are absent from the output.
pub fn sold_by_bin<I>(rows: I) -> BTreeMap<Bin, f64>
where
    I: Iterator<Item = (Option<Bin>, Option<f64>)>,
{
    let mut sums: BTreeMap<Bin, f64> = BTreeMap::new();
    for (bin, sold) in rows {
        let Some(bin) = bin else { continue };
        let entry = sums.entry(bin).or_insert(0.0);
        if let Some(sold) = sold {
            *entry += sold;
        }
    }
    sums
}

/// Per-price-interval occupancy. `count` covers every record assigned to the
/// interval regardless of sold status, `sold` sums the indicator and
/// `not_sold` is the difference.
pub fn price_buckets(records: &[SaleRecord]) -> BTreeMap<Bin, PriceBucket> {
    let mut counts: BTreeMap<Bin, u64> = BTreeMap::new();
    let mut sold_sums: BTreeMap<Bin, f64> = BTreeMap::new();
    for record in records {
        let Some(bin) = record.price_interval else { continue };
        *counts.entry(bin).or_default() += 1;
        if let Some(sold) = record.sold {
            *sold_sums.entry(bin).or_insert(0.0) += sold;
        }
    }

    counts
        .into_iter()
        .map(|(bin, count)| {
            let sold = sold_sums.get(&bin).copied().unwrap_or(0.0);
            let bucket = PriceBucket {
                count,
                not_sold: count as f64 - sold,
                sold,
            };
            (bin, bucket)
        })
        .collect()
}
