use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use crate::core::{gateways::payment::PaymentGateway, prelude::*, usecases::Error as ParameterError};
use turfbook_application::error::AppError;

/// The header that carries the account of an authenticated
/// caller, as forwarded by the authentication proxy.
pub const ACCOUNT_ID_HEADER: &str = "X-Account-Id";

type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub struct Auth {
    account_id: Option<Id>,
}

impl Auth {
    pub fn account_id(&self) -> Result<&Id> {
        self.account_id
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn account_id_from_header(request: &Request) -> Option<Id> {
        request
            .headers()
            .get_one(ACCOUNT_ID_HEADER)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Id::from)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_id = Self::account_id_from_header(request);
        Outcome::Success(Self { account_id })
    }
}

pub struct PaymentGw(pub Box<dyn PaymentGateway + Send + Sync>);

#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
