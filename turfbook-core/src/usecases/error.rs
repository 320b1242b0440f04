use crate::{
    entities::{
        availability::ClosedReason, money::AmountOutOfRange, reservation::ReservationStatus,
        settings::InvalidPlatformSettings, slot::InvalidSlotGrid,
    },
    gateways::payment,
    repositories,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date")]
    InvalidDate,
    #[error("The date is in the past")]
    DateInPast,
    #[error("Invalid slot time")]
    InvalidSlotTime,
    #[error("Invalid day of the week")]
    InvalidWeekday,
    #[error("Invalid price")]
    InvalidPrice,
    #[error(transparent)]
    AmountOutOfRange(#[from] AmountOutOfRange),
    #[error("Invalid name")]
    InvalidName,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error(transparent)]
    InvalidFeeSettings(#[from] InvalidPlatformSettings),
    #[error(transparent)]
    InvalidSlotGrid(#[from] InvalidSlotGrid),
    #[error("{0}")]
    VenueClosed(ClosedReason),
    #[error("The slot has been disabled by the venue")]
    SlotDisabled,
    #[error("The slot has already been taken")]
    SlotConflict,
    #[error("The reservation is not in a confirmable state: {status}")]
    StateConflict { status: ReservationStatus },
    #[error("The reservation has not expired yet")]
    NotExpired,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The payment could not be verified")]
    PaymentVerification,
    #[error(transparent)]
    PaymentGateway(#[from] payment::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

