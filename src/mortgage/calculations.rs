use crate::models::mortgage::{
    AmortizationRow, LoanParameters, MortgageCalculation, MortgageError, RateConvention,
    MAX_TERM_YEARS,
};

pub fn compute_payment(
    params: &LoanParameters,
    convention: RateConvention,
) -> Result<MortgageCalculation, MortgageError> {
    validate(params)?;

    let loan_amount = params.price - params.down_payment;
    let rate = periodic_rate(params, convention);
    let periods = total_payments(params)?;

    let payment = pmt(rate, periods, loan_amount);
    let total = payment * periods;
    if !payment.is_finite() {
        return Err(MortgageError::NotFinite("payment"));
    }
    if !total.is_finite() {
        return Err(MortgageError::NotFinite("total payment"));
    }

    Ok(MortgageCalculation {
        payment,
        total,
        loan_amount,
        frequency: params.frequency,
    })
}

/// Splits every payment into its interest and principal parts.
pub fn amortization_schedule(
    params: &LoanParameters,
    convention: RateConvention,
) -> Result<Vec<AmortizationRow>, MortgageError> {
    validate(params)?;

    let loan_amount = params.price - params.down_payment;
    let rate = periodic_rate(params, convention);
    let periods = total_payments(params)?;

    let schedule = (1..=periods as u32)
        .map(|period| {
            let interest = interest_payment_for_period(rate, period as f64, periods, loan_amount);
            let principal =
                principal_payment_for_period(rate, period as f64, periods, loan_amount);
            AmortizationRow {
                period,
                interest,
                principal,
                balance: remaining_balance(rate, period as f64, periods, loan_amount),
            }
        })
        .collect();

    Ok(schedule)
}

pub fn validate(params: &LoanParameters) -> Result<(), MortgageError> {
    let amounts = [
        ("price", params.price),
        ("down payment", params.down_payment),
        ("interest rate", params.annual_rate_percent),
    ];

    for (field, value) in amounts {
        if !value.is_finite() {
            return Err(MortgageError::NotFinite(field));
        }
        if value < 0.0 {
            return Err(MortgageError::Negative(field));
        }
    }

    if params.down_payment > params.price {
        return Err(MortgageError::DownPaymentExceedsPrice);
    }

    if params.years == 0 {
        return Err(MortgageError::ZeroTerm);
    }
    if params.years > MAX_TERM_YEARS {
        return Err(MortgageError::TermTooLong(params.years));
    }

    Ok(())
}

pub fn periodic_rate(params: &LoanParameters, convention: RateConvention) -> f64 {
    let yearly = params.annual_rate_percent / 100.0;
    match convention {
        RateConvention::MonthlyEquivalent => yearly / 12.0,
        RateConvention::PerPeriod => yearly / params.frequency.payments_per_year() as f64,
    }
}

fn total_payments(params: &LoanParameters) -> Result<f64, MortgageError> {
    params
        .years
        .checked_mul(params.frequency.payments_per_year())
        .map(|periods| periods as f64)
        .ok_or(MortgageError::TermTooLong(params.years))
}

// Fixed payment per period for a loan of `principal` over `periods` payments
pub fn pmt(rate: f64, periods: f64, principal: f64) -> f64 {
    // 1 - (1 + rate)^-periods, kept exact for rates close to zero
    let discount = -(-periods * rate.ln_1p()).exp_m1();
    if rate == 0.0 || discount == 0.0 {
        principal / periods
    } else {
        principal * rate / discount
    }
}

// Outstanding principal after `period` payments
pub fn remaining_balance(rate: f64, period: f64, periods: f64, principal: f64) -> f64 {
    let payment = pmt(rate, periods, principal);
    if rate == 0.0 {
        return (principal - payment * period).max(0.0);
    }

    let growth = (period * rate.ln_1p()).exp_m1();
    let balance = principal * (1.0 + growth) - payment * (growth / rate);
    balance.max(0.0)
}

// Part of the payment at `period` (1-based) that goes to interest
pub fn interest_payment_for_period(rate: f64, period: f64, periods: f64, principal: f64) -> f64 {
    remaining_balance(rate, period - 1.0, periods, principal) * rate
}

// Part of the payment at `period` (1-based) that pays back principal
pub fn principal_payment_for_period(
    rate: f64,
    period: f64,
    periods: f64,
    principal: f64,
) -> f64 {
    pmt(rate, periods, principal) - interest_payment_for_period(rate, period, periods, principal)
}
