use rust_decimal::Decimal;

use crate::entities::{money::*, settings::*};

/// The convenience fee that is charged on top of the base amount.
pub fn compute_convenience_fee(
    base_amount: Decimal,
    settings: &PlatformSettings,
) -> Result<Decimal, AmountOutOfRange> {
    if !settings.convenience_fee_enabled {
        return Ok(Decimal::ZERO);
    }
    match settings.convenience_fee_type {
        ConvenienceFeeType::Flat => Ok(round_currency(settings.convenience_fee_value)),
        ConvenienceFeeType::Percent => percentage_of(base_amount, settings.convenience_fee_value),
    }
}

/// Splits the base amount into `(platform_commission, owner_earnings)`.
pub fn compute_commission(
    base_amount: Decimal,
    commission_percentage: Decimal,
) -> Result<(Decimal, Decimal), AmountOutOfRange> {
    let platform_commission = percentage_of(base_amount, commission_percentage)?;
    let owner_earnings = subtract_amounts(base_amount, platform_commission)?;
    Ok((platform_commission, owner_earnings))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub base_amount: Decimal,
    pub convenience_fee: Decimal,
    pub total_amount: Decimal,
    pub commission_percentage: Decimal,
}

pub fn price_reservation(
    base_amount: Decimal,
    settings: &PlatformSettings,
) -> Result<Pricing, AmountOutOfRange> {
    let base_amount = round_currency(base_amount);
    let convenience_fee = compute_convenience_fee(base_amount, settings)?;
    Ok(Pricing {
        base_amount,
        convenience_fee,
        total_amount: add_amounts(base_amount, convenience_fee)?,
        commission_percentage: settings.default_commission_percentage,
    })
}
