//! Infrastructure-side helpers for mapping surrealdb results into the
//! shared error taxonomy.

use crate::shared::{
    domain::errors::UniqueSaveError,
    infrastructure::errors::{AppError, InfrastructureError},
};

pub trait CatchInfra<T> {
    fn catch_infra(self) -> Result<T, InfrastructureError>;
}

impl<T> CatchInfra<T> for Result<T, surrealdb::Error> {
    fn catch_infra(self) -> Result<T, InfrastructureError> {
        self.map_err(Into::into)
    }
}

pub trait CatchApp {
    fn catch_app(self) -> Result<surrealdb::Response, AppError<UniqueSaveError>>;
}

impl CatchApp for Result<surrealdb::Response, surrealdb::Error> {
    fn catch_app(self) -> Result<surrealdb::Response, AppError<UniqueSaveError>> {
        use surrealdb::{error, Error};

        match self {
            Ok(response) => Ok(response),
            Err(
                Error::Db(error::Db::RecordExists { .. })
                | Error::Db(error::Db::IndexExists { .. }),
            ) => Err(AppError::App(UniqueSaveError::AlreadyExists)),
            Err(e) => Err(AppError::Infrastructure(e.into())),
        }
    }
}

pub trait MapResponse {
    fn map_response(self) -> Result<(), AppError<UniqueSaveError>>;
}

impl MapResponse for Result<surrealdb::Response, AppError<UniqueSaveError>> {
    fn map_response(self) -> Result<(), AppError<UniqueSaveError>> {
        self.map(|_| ())
    }
}

/// Fail-soft amount column: a malformed or missing value deserializes to
/// `None` instead of aborting the whole query (one bad row must not blank
/// a report).
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<samiti_core::Amount>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde::Deserialize::deserialize(deserializer)
        .unwrap_or(serde_json::Value::Null);
    Ok(serde_json::from_value(value).ok())
}
