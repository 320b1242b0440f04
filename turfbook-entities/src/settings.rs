use rust_decimal::Decimal;
use strum::{Display, EnumString};
use thiserror::Error;

use crate::money::MAX_AMOUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConvenienceFeeType {
    Flat,
    Percent,
}

/// Process-wide configuration of fees and commissions.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSettings {
    pub convenience_fee_enabled       : bool,
    pub convenience_fee_type          : ConvenienceFeeType,
    // Either an absolute amount or a percentage, depending on the type
    pub convenience_fee_value         : Decimal,
    pub default_commission_percentage : Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPlatformSettings {
    #[error("The convenience fee must not be negative")]
    NegativeFee,
    #[error("The flat convenience fee is too high")]
    FlatFeeTooHigh,
    #[error("The convenience fee must not exceed 100%")]
    FeePercentageTooHigh,
    #[error("The commission must be within 0% and 100%")]
    CommissionOutOfRange,
}

impl PlatformSettings {
    pub fn validate(&self) -> Result<(), InvalidPlatformSettings> {
        if self.convenience_fee_value.is_sign_negative() {
            return Err(InvalidPlatformSettings::NegativeFee);
        }
        if self.convenience_fee_type == ConvenienceFeeType::Flat
            && self.convenience_fee_value >= MAX_AMOUNT
        {
            return Err(InvalidPlatformSettings::FlatFeeTooHigh);
        }
        if self.convenience_fee_type == ConvenienceFeeType::Percent
            && self.convenience_fee_value > Decimal::ONE_HUNDRED
        {
            return Err(InvalidPlatformSettings::FeePercentageTooHigh);
        }
        if self.default_commission_percentage.is_sign_negative()
            || self.default_commission_percentage > Decimal::ONE_HUNDRED
        {
            return Err(InvalidPlatformSettings::CommissionOutOfRange);
        }
        Ok(())
    }
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            convenience_fee_enabled: true,
            convenience_fee_type: ConvenienceFeeType::Flat,
            convenience_fee_value: Decimal::new(2000, 2),
            default_commission_percentage: Decimal::new(1000, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_valid() {
        let settings = PlatformSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.convenience_fee_value, dec!(20.00));
        assert_eq!(settings.default_commission_percentage, dec!(10.00));
    }

    #[test]
    fn reject_invalid_settings() {
        let negative_fee = PlatformSettings {
            convenience_fee_value: dec!(-1),
            ..Default::default()
        };
        assert_eq!(
            negative_fee.validate(),
            Err(InvalidPlatformSettings::NegativeFee)
        );
        let flat_above_hundred = PlatformSettings {
            convenience_fee_value: dec!(150),
            ..Default::default()
        };
        assert!(flat_above_hundred.validate().is_ok());
        let percent_above_hundred = PlatformSettings {
            convenience_fee_type: ConvenienceFeeType::Percent,
            ..flat_above_hundred
        };
        assert_eq!(
            percent_above_hundred.validate(),
            Err(InvalidPlatformSettings::FeePercentageTooHigh)
        );
        let huge_flat_fee = PlatformSettings {
            convenience_fee_value: MAX_AMOUNT,
            ..Default::default()
        };
        assert_eq!(
            huge_flat_fee.validate(),
            Err(InvalidPlatformSettings::FlatFeeTooHigh)
        );
        let commission = PlatformSettings {
            default_commission_percentage: dec!(100.01),
            ..Default::default()
        };
        assert_eq!(
            commission.validate(),
            Err(InvalidPlatformSettings::CommissionOutOfRange)
        );
    }

    #[test]
    fn parse_fee_type() {
        assert_eq!(
            "PERCENT".parse::<ConvenienceFeeType>().unwrap(),
            ConvenienceFeeType::Percent
        );
        assert_eq!(ConvenienceFeeType::Flat.to_string(), "flat");
    }
}
