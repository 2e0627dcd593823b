use serde::Deserialize;

use crate::models::mortgage::{LoanParameters, MortgageError, PaymentFrequency};

/// Calculator form as posted by the mortgage page. Values arrive as text and
/// are validated here so bad input can be shown next to the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageForm {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub down_payment: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub client_email: String,
}

impl MortgageForm {
    pub fn to_parameters(&self) -> Result<LoanParameters, MortgageError> {
        let frequency: u32 = parse_field(&self.frequency, "payment frequency")?;

        Ok(LoanParameters {
            price: parse_field(&self.price, "price")?,
            down_payment: parse_field(&self.down_payment, "down payment")?,
            years: parse_field(&self.years, "term")?,
            annual_rate_percent: parse_field(&self.rate, "interest rate")?,
            frequency: PaymentFrequency::try_from(frequency)?,
        })
    }
}

/// JSON and query string shape of the calculator input.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageRequest {
    pub price: f64,
    pub down_payment: f64,
    pub years: u32,
    pub rate: f64,
    pub frequency: PaymentFrequency,
}

impl From<MortgageRequest> for LoanParameters {
    fn from(request: MortgageRequest) -> LoanParameters {
        LoanParameters {
            price: request.price,
            down_payment: request.down_payment,
            years: request.years,
            annual_rate_percent: request.rate,
            frequency: request.frequency,
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
) -> Result<T, MortgageError> {
    value
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| MortgageError::NotFinite(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MortgageForm {
        MortgageForm {
            price: "500,000".into(),
            down_payment: "100000".into(),
            years: "25".into(),
            rate: " 5 ".into(),
            frequency: "26".into(),
            client_email: String::new(),
        }
    }

    #[test]
    fn parses_form_values() {
        let params = form().to_parameters().unwrap();

        assert_eq!(params.price, 500000.0);
        assert_eq!(params.annual_rate_percent, 5.0);
        assert_eq!(params.frequency, PaymentFrequency::BiWeekly);
    }

    #[test]
    fn reports_the_bad_field() {
        let mut bad = form();
        bad.rate = "five".into();
        assert_eq!(
            bad.to_parameters(),
            Err(MortgageError::NotFinite("interest rate"))
        );

        let mut bad = form();
        bad.years = "-3".into();
        assert_eq!(bad.to_parameters(), Err(MortgageError::NotFinite("term")));

        let mut bad = form();
        bad.frequency = "4".into();
        assert_eq!(
            bad.to_parameters(),
            Err(MortgageError::UnsupportedFrequency(4))
        );
    }
}
