//! Mortgage estimate math.

/// Terms of a fixed-rate, fully amortized loan.
///
/// Callers validate that `term_years` is at least one before building
/// terms; the math divides by the number of months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageTerms {
    /// Amount borrowed, in dollars.
    pub principal: f64,
    /// Annual interest rate as a percentage, e.g. `5.25`.
    pub annual_rate_pct: f64,
    /// Amortization period in years.
    pub term_years: u32,
}

/// A full payment estimate for one set of terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageEstimate {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

/// Estimate the monthly payment with the standard amortization formula.
/// A zero interest rate degrades to straight division over the term.
pub fn estimate(terms: MortgageTerms) -> MortgageEstimate {
    let months = f64::from(terms.term_years * 12);
    let monthly_rate = terms.annual_rate_pct / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        terms.principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        terms.principal * monthly_rate * growth / (growth - 1.0)
    };

    let total_cost = monthly_payment * months;
    MortgageEstimate {
        monthly_payment,
        total_interest: total_cost - terms.principal,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_textbook_figure() {
        // 100k at 6% over 30 years pays $599.55 a month.
        let result = estimate(MortgageTerms {
            principal: 100_000.0,
            annual_rate_pct: 6.0,
            term_years: 30,
        });

        assert!((result.monthly_payment - 599.55).abs() < 0.01);
        assert!((result.total_cost - result.monthly_payment * 360.0).abs() < 1e-6);
    }

    #[test]
    fn zero_rate_is_straight_division() {
        let result = estimate(MortgageTerms {
            principal: 360_000.0,
            annual_rate_pct: 0.0,
            term_years: 30,
        });

        assert_eq!(result.monthly_payment, 1_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_cost, 360_000.0);
    }

    #[test]
    fn payment_grows_with_the_rate() {
        let terms = |rate| MortgageTerms {
            principal: 500_000.0,
            annual_rate_pct: rate,
            term_years: 25,
        };

        let cheap = estimate(terms(3.0)).monthly_payment;
        let dear = estimate(terms(7.0)).monthly_payment;

        assert!(dear > cheap);
        // Every payment at least covers the first month's interest.
        assert!(cheap > 500_000.0 * 0.03 / 12.0);
    }
}
