use crate::model::SaleRecord;

/// Fixed divisor for the day-count to years conversion. No leap-year
/// correction, no calendar arithmetic.
const DAYS_PER_YEAR: f64 = 365.0;

/// Fills `age_at_purchase` and its floored companion for every record that
/// carries both dates. A birth date after the sale date is not rejected and
/// yields a negative age.
pub fn compute_ages(records: &mut [SaleRecord]) {
    for record in records.iter_mut() {
        record.age_at_purchase = age_at_purchase(record);
        record.age_at_purchase_rounded = record.age_at_purchase.map(f64::floor);
    }
}

fn age_at_purchase(record: &SaleRecord) -> Option<f64> {
    let sale = record.date_sale?;
    let birth = record.birth_date?;
    let days = sale.signed_duration_since(birth).num_days();
    Some(days as f64 / DAYS_PER_YEAR)
}
