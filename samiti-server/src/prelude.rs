mod entity {
    /// Keyed record as the API exposes it: the id inlined next to the
    /// record's own fields.
    #[derive(serde::Serialize)]
    pub struct Entity<K, T> {
        pub id: K,
        #[serde(flatten)]
        pub value: T,
    }

    impl<K, T> From<(K, T)> for Entity<K, T> {
        fn from((id, value): (K, T)) -> Self {
            Self { id, value }
        }
    }
}

pub use entity::*;

mod catch {
    use axum::http::StatusCode;
    use samiti::{
        prelude::{AppContext, AppError, InfrastructureError},
        shared::application::logging::LogService,
    };

    pub trait CatchInfra<T>: Sized {
        type Output;
        fn catch_infra(self, ctx: &AppContext) -> Result<Self::Output, StatusCode> {
            match self.get_infra() {
                Ok(t) => Ok(t),
                Err(e) => {
                    let logger: LogService = ctx.provide();
                    logger.error(e);
                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }
        fn get_infra(self) -> Result<Self::Output, InfrastructureError>;
    }

    impl<T> CatchInfra<T> for Result<T, InfrastructureError> {
        type Output = T;

        fn get_infra(self) -> Result<Self::Output, InfrastructureError> {
            self
        }
    }

    impl<T, E> CatchInfra<T> for Result<T, AppError<E>> {
        type Output = Result<T, E>;

        fn get_infra(self) -> Result<Self::Output, InfrastructureError> {
            match self {
                Ok(t) => Ok(Ok(t)),
                Err(AppError::App(e)) => Ok(Err(e)),
                Err(AppError::Infrastructure(e)) => Err(e),
            }
        }
    }
}

pub use catch::*;

mod into_json {
    use axum::Json;

    use super::Entity;

    pub trait IntoJson<K, T> {
        type Output;

        fn into_json(self) -> Self::Output;
    }

    impl<K, T, E> IntoJson<K, T> for Result<Vec<(K, T)>, E> {
        type Output = Result<Json<Vec<Entity<K, T>>>, E>;

        fn into_json(self) -> Self::Output {
            self.map(|rows| Json(rows.into_iter().map(Entity::from).collect::<Vec<_>>()))
        }
    }
}

pub use into_json::*;

mod catch_update {
    use axum::http::StatusCode;
    use samiti::prelude::InfrastructureError;

    /// Maps a repository update outcome onto a status, for the two update
    /// error enums that both split into not-found and unspecified.
    pub trait CatchUpdate {
        fn catch_update(self) -> Result<StatusCode, InfrastructureError>;
    }

    macro_rules! impl_catch_update {
        ($($error:path),* $(,)?) => {
            $(
            impl CatchUpdate for Result<(), $error> {
                fn catch_update(self) -> Result<StatusCode, InfrastructureError> {
                    use $error as E;
                    match self {
                        Ok(_) => Ok(StatusCode::OK),
                        Err(E::NotFound) => Ok(StatusCode::NOT_FOUND),
                        Err(E::Unspecified(e)) => Err(e),
                    }
                }
            }
            )*
        };
    }

    impl_catch_update!(
        samiti::backoffice::members::domain::repository::UpdateError,
        samiti::backoffice::deposits::domain::repository::UpdateError,
        samiti::backoffice::fines::domain::repository::UpdateError,
    );
}

pub use catch_update::*;
