// src/data_analysis/linear_fit.rs

use nalgebra::{DMatrix, DVector};
use ndarray::Array1;
use std::error::Error;

/// Ordinary least-squares fit of y on x with an intercept term.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
    pub n_points: usize,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient table in the style of a regression summary printout.
    /// t-values for an exact fit come out infinite and are shown as-is.
    pub fn summary_table(&self) -> String {
        let t_slope = self.slope / self.slope_stderr;
        let t_intercept = self.intercept / self.intercept_stderr;
        let mut out = String::new();
        out.push_str(&format!(
            "{:<8}{:>14}{:>12}{:>12}\n",
            "", "coef", "std err", "t"
        ));
        out.push_str(&"-".repeat(46));
        out.push('\n');
        out.push_str(&format!(
            "{:<8}{:>14.4}{:>12.3}{:>12.3}\n",
            "x", self.slope, self.slope_stderr, t_slope
        ));
        out.push_str(&format!(
            "{:<8}{:>14.4}{:>12.3}{:>12.3}\n",
            "const", self.intercept, self.intercept_stderr, t_intercept
        ));
        out
    }
}

/// Fits y = slope * x + intercept by ordinary least squares.
///
/// The solve is delegated to an SVD of the design matrix `[x, 1]`
/// (slope coefficient first). A rank-deficient design, e.g. a constant
/// x column, is rejected rather than solved in the minimum-norm sense.
/// Standard errors come from the residual variance and the diagonal of
/// the inverse normal matrix.
pub fn fit_linear(x: &Array1<f64>, y: &Array1<f64>) -> Result<LinearFit, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err(format!(
            "x and y column lengths differ ({} vs {})",
            x.len(),
            y.len()
        )
        .into());
    }
    let n = x.len();
    if n < 2 {
        return Err("linear fit requires at least two points".into());
    }

    let design = DMatrix::from_fn(n, 2, |row, col| if col == 0 { x[row] } else { 1.0 });
    let rhs = DVector::from_iterator(n, y.iter().cloned());

    let svd = design.clone().svd(true, true);
    let tolerance = svd.singular_values.max() * 1e-12;
    if svd.rank(tolerance) < 2 {
        return Err("design matrix is rank deficient (is the x column constant?)".into());
    }
    let beta = svd
        .solve(&rhs, tolerance)
        .map_err(|e| format!("least-squares solve failed: {}", e))?;
    if !beta.iter().all(|v| v.is_finite()) {
        return Err("least-squares solve produced non-finite coefficients".into());
    }

    let residuals = &rhs - &design * &beta;
    let rss: f64 = residuals.iter().map(|r| r * r).sum();
    let normal = design.transpose() * &design;
    let normal_inv = normal
        .try_inverse()
        .ok_or("normal matrix is singular, cannot derive standard errors")?;

    // With exactly two points the residual degrees of freedom are zero
    // and the fit is exact; report zero standard errors.
    let dof = n - 2;
    let sigma2 = if dof > 0 { rss / dof as f64 } else { 0.0 };
    let slope_stderr = (sigma2 * normal_inv[(0, 0)]).sqrt();
    let intercept_stderr = (sigma2 * normal_inv[(1, 1)]).sqrt();

    Ok(LinearFit {
        slope: beta[0],
        intercept: beta[1],
        slope_stderr,
        intercept_stderr,
        n_points: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn recovers_exact_line() {
        // Fit y = 2x + 1 on exact data
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 3.0, 5.0, 7.0];
        let fit = fit_linear(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 1.0).abs() < 1e-10);
        assert!(fit.slope_stderr.abs() < 1e-8);
        assert!(fit.intercept_stderr.abs() < 1e-8);
        assert_eq!(fit.n_points, 4);
    }

    #[test]
    fn noisy_data_has_positive_stderr() {
        let x = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = array![0.1, 0.9, 2.2, 2.8, 4.1, 4.9];
        let fit = fit_linear(&x, &y).unwrap();
        assert!((fit.slope - 1.0).abs() < 0.1);
        assert!(fit.slope_stderr > 0.0);
        assert!(fit.intercept_stderr > 0.0);
    }

    #[test]
    fn rejects_constant_x() {
        let x = array![2.0, 2.0, 2.0, 2.0];
        let y = array![1.0, 2.0, 3.0, 4.0];
        let err = fit_linear(&x, &y).unwrap_err();
        assert!(err.to_string().contains("rank deficient"), "{}", err);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![1.0, 2.0];
        assert!(fit_linear(&x, &y).is_err());
    }

    #[test]
    fn rejects_single_point() {
        let x = array![1.0];
        let y = array![2.0];
        assert!(fit_linear(&x, &y).is_err());
    }

    #[test]
    fn two_points_fit_exactly_with_zero_stderr() {
        let x = array![1.0, 3.0];
        let y = array![2.0, 6.0];
        let fit = fit_linear(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 0.0).abs() < 1e-12);
        assert_eq!(fit.slope_stderr, 0.0);
    }

    #[test]
    fn summary_table_lists_both_coefficients() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 3.0, 5.0, 7.0];
        let table = fit_linear(&x, &y).unwrap().summary_table();
        assert!(table.contains("coef"));
        assert!(table.contains("std err"));
        assert!(table.contains("x"));
        assert!(table.contains("const"));
        assert!(table.contains("2.0000"));
        assert!(table.contains("1.0000"));
    }
}

// src/data_analysis/linear_fit.rs
