use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits of all currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Exclusive upper bound of prices and flat fees,
/// i.e. at most 8 integer digits.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The amount is out of range")]
pub struct AmountOutOfRange;

/// Rounds a currency amount half up to exactly two decimal places.
///
/// Amounts are never negative, i.e. rounding the midpoint away
/// from zero is the same as rounding it up.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// The given percentage of an amount, rounded to the currency precision.
pub fn percentage_of(
    amount: Decimal,
    percentage: Decimal,
) -> Result<Decimal, AmountOutOfRange> {
    amount
        .checked_mul(percentage)
        .and_then(|x| x.checked_div(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .ok_or(AmountOutOfRange)
}

pub fn add_amounts(lhs: Decimal, rhs: Decimal) -> Result<Decimal, AmountOutOfRange> {
    lhs.checked_add(rhs).map(round_currency).ok_or(AmountOutOfRange)
}

pub fn subtract_amounts(lhs: Decimal, rhs: Decimal) -> Result<Decimal, AmountOutOfRange> {
    lhs.checked_sub(rhs).map(round_currency).ok_or(AmountOutOfRange)
}
