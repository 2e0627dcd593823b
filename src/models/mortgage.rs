use std::fmt;

use serde::{Deserialize, Serialize};

/// Payments per year offered by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub fn payments_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::BiWeekly => "Bi-Weekly",
            PaymentFrequency::Weekly => "Weekly",
        }
    }
}

impl TryFrom<u32> for PaymentFrequency {
    type Error = MortgageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(PaymentFrequency::Monthly),
            26 => Ok(PaymentFrequency::BiWeekly),
            52 => Ok(PaymentFrequency::Weekly),
            other => Err(MortgageError::UnsupportedFrequency(other)),
        }
    }
}

impl From<PaymentFrequency> for u32 {
    fn from(frequency: PaymentFrequency) -> u32 {
        frequency.payments_per_year()
    }
}

/// How the nominal annual rate is turned into a per-payment rate.
///
/// `MonthlyEquivalent` always divides by 12, even for bi-weekly and weekly
/// schedules. It matches the numbers the site has always shown. `PerPeriod`
/// divides by the number of payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateConvention {
    #[default]
    MonthlyEquivalent,
    PerPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub price: f64,
    pub down_payment: f64,
    pub years: u32,
    /// Nominal annual rate in percent, e.g. 5.0 for 5 %.
    pub annual_rate_percent: f64,
    pub frequency: PaymentFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCalculation {
    pub payment: f64,
    pub total: f64,
    pub loan_amount: f64,
    #[serde(rename = "freq")]
    pub frequency: PaymentFrequency,
}

impl MortgageCalculation {
    pub fn payment_line(&self) -> String {
        format!(
            "Payment: ${:.2} ({})",
            self.payment,
            self.frequency.label()
        )
    }

    pub fn total_line(&self) -> String {
        format!("Total Payment: ${:.2}", self.total)
    }

    pub fn loan_line(&self) -> String {
        format!("Loan Amount: ${:.2}", self.loan_amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub period: u32,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Longest term the calculator accepts.
pub const MAX_TERM_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum MortgageError {
    NotFinite(&'static str),
    Negative(&'static str),
    DownPaymentExceedsPrice,
    ZeroTerm,
    TermTooLong(u32),
    UnsupportedFrequency(u32),
}

impl fmt::Display for MortgageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MortgageError::NotFinite(field) => write!(f, "{field} must be a number"),
            MortgageError::Negative(field) => write!(f, "{field} cannot be negative"),
            MortgageError::DownPaymentExceedsPrice => {
                write!(f, "down payment cannot exceed the price")
            }
            MortgageError::ZeroTerm => write!(f, "term must be at least one year"),
            MortgageError::TermTooLong(years) => {
                write!(f, "term of {years} years is too long, the limit is {MAX_TERM_YEARS}")
            }
            MortgageError::UnsupportedFrequency(freq) => {
                write!(f, "unsupported payment frequency {freq}, use 12, 26 or 52")
            }
        }
    }
}

impl std::error::Error for MortgageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_from_payments_per_year() {
        assert_eq!(PaymentFrequency::try_from(26), Ok(PaymentFrequency::BiWeekly));
        assert_eq!(
            PaymentFrequency::try_from(4),
            Err(MortgageError::UnsupportedFrequency(4))
        );
    }

    #[test]
    fn calculation_serializes_with_feed_names() {
        let calculation = MortgageCalculation {
            payment: 1.5,
            total: 3.0,
            loan_amount: 2.0,
            frequency: PaymentFrequency::Weekly,
        };
        let json = serde_json::to_value(calculation).unwrap();

        assert_eq!(json["loanAmount"], 2.0);
        assert_eq!(json["freq"], 52);
    }

    #[test]
    fn result_lines() {
        let calculation = MortgageCalculation {
            payment: 2338.3601,
            total: 701508.0498,
            loan_amount: 400000.0,
            frequency: PaymentFrequency::Monthly,
        };

        assert_eq!(calculation.payment_line(), "Payment: $2338.36 (Monthly)");
        assert_eq!(calculation.total_line(), "Total Payment: $701508.05");
        assert_eq!(calculation.loan_line(), "Loan Amount: $400000.00");
    }
}
