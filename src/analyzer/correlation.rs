use crate::model::{Matrix2, SaleRecord};

/// Covariance and correlation over (age_at_purchase, price) for records sold
/// to a private individual.
///
/// Returns `(covariance, correlation, correlation_no_na)`. The first two
/// carry missing values along as NaN, so one gap poisons the whole matrix.
/// The third drops any pair with a gap in either field and recomputes.
pub fn sold_individual_matrices(records: &[SaleRecord]) -> (Matrix2, Matrix2, Matrix2) {
    let filtered: Vec<&SaleRecord> = records
        .iter()
        .filter(|r| r.sold == Some(1.0) && r.individual == Some(1.0))
        .collect();

    let ages: Vec<f64> = filtered
        .iter()
        .map(|r| r.age_at_purchase.unwrap_or(f64::NAN))
        .collect();
    let prices: Vec<f64> = filtered
        .iter()
        .map(|r| r.price.unwrap_or(f64::NAN))
        .collect();

    let covariance = covariance_matrix(&ages, &prices);
    let correlation = correlation_matrix(&ages, &prices);

    let (clean_ages, clean_prices): (Vec<f64>, Vec<f64>) = ages
        .iter()
        .zip(prices.iter())
        .filter(|(age, price)| !age.is_nan() && !price.is_nan())
        .map(|(age, price)| (*age, *price))
        .unzip();
    let correlation_no_na = correlation_matrix(&clean_ages, &clean_prices);

    (covariance, correlation, correlation_no_na)
}

/// Population covariance matrix of two equally long sequences. Empty input
/// yields NaN entries, never an error.
pub fn covariance_matrix(x: &[f64], y: &[f64]) -> Matrix2 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut xx = 0.0;
    let mut xy = 0.0;
    let mut yy = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        xx += dx * dx;
        xy += dx * dy;
        yy += dy * dy;
    }

    Matrix2([[xx / n, xy / n], [xy / n, yy / n]])
}

/// Pearson correlation matrix of two equally long sequences. Zero variance
/// in either field, fewer than two observations or a NaN anywhere all
/// surface as NaN entries.
pub fn correlation_matrix(x: &[f64], y: &[f64]) -> Matrix2 {
    let cov = covariance_matrix(x, y);
    let var_x = cov.0[0][0];
    let var_y = cov.0[1][1];
    let denom = (var_x * var_y).sqrt();

    let diagonal = |variance: f64| if variance > 0.0 { 1.0 } else { f64::NAN };

    Matrix2([
        [diagonal(var_x), cov.0[0][1] / denom],
        [cov.0[1][0] / denom, diagonal(var_y)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sold_individual(age: Option<f64>, price: Option<f64>) -> SaleRecord {
        let mut record = SaleRecord::new(None, None, price, Some(1.0), Some(1.0));
        record.age_at_purchase = age;
        record
    }

    #[test]
    fn perfectly_linear_pair_correlates_to_one() {
        let records = vec![
            sold_individual(Some(30.0), Some(100.0)),
            sold_individual(Some(40.0), Some(200.0)),
            sold_individual(Some(50.0), Some(300.0)),
        ];
        let (cov, corr, corr_no_na) = sold_individual_matrices(&records);

        // Population variances of [30, 40, 50] and [100, 200, 300].
        assert!((cov.0[0][0] - 200.0 / 3.0).abs() < 1e-9);
        assert!((cov.0[1][1] - 20000.0 / 3.0).abs() < 1e-9);
        assert!((cov.0[0][1] - 2000.0 / 3.0).abs() < 1e-9);
        assert_eq!(cov.0[0][1], cov.0[1][0]);

        for i in 0..2 {
            for j in 0..2 {
                assert!((corr.0[i][j] - 1.0).abs() < 1e-12);
                assert_eq!(corr.0[i][j], corr_no_na.0[i][j]);
            }
        }
    }

    #[test]
    fn unsold_and_organizational_records_are_excluded() {
        let mut unsold = sold_individual(Some(20.0), Some(999999.0));
        unsold.sold = Some(0.0);
        let mut organization = sold_individual(Some(20.0), Some(999999.0));
        organization.individual = Some(0.0);

        let records = vec![
            unsold,
            organization,
            sold_individual(Some(30.0), Some(100.0)),
            sold_individual(Some(40.0), Some(200.0)),
        ];
        let (cov, _, _) = sold_individual_matrices(&records);
        // Only the two sold-to-individual records remain: variance of [30, 40].
        assert!((cov.0[0][0] - 25.0).abs() < 1e-12);
    }

    #[test]
    fn missing_value_poisons_only_the_propagating_matrices() {
        let records = vec![
            sold_individual(Some(30.0), Some(100.0)),
            sold_individual(None, Some(500.0)),
            sold_individual(Some(40.0), Some(200.0)),
            sold_individual(Some(50.0), Some(300.0)),
        ];
        let (cov, corr, corr_no_na) = sold_individual_matrices(&records);
        assert!(cov.0[0][1].is_nan());
        assert!(corr.0[0][1].is_nan());
        assert!((corr_no_na.0[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_subsets_yield_nan_not_errors() {
        let (cov, corr, corr_no_na) = sold_individual_matrices(&[]);
        assert!(cov.0[0][0].is_nan());
        assert!(corr.0[0][1].is_nan());
        assert!(corr_no_na.0[1][1].is_nan());

        let single = vec![sold_individual(Some(30.0), Some(100.0))];
        let (_, corr, _) = sold_individual_matrices(&single);
        assert!(corr.0[0][0].is_nan());

        let flat = vec![
            sold_individual(Some(30.0), Some(100.0)),
            sold_individual(Some(30.0), Some(200.0)),
        ];
        let (_, corr, _) = sold_individual_matrices(&flat);
        // Zero variance in age leaves the off-diagonal undefined.
        assert!(corr.0[0][1].is_nan());
    }
}
