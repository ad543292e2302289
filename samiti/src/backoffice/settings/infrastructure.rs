pub mod repository {
    use crate::{
        backoffice::settings::domain::{repository::Repository, setting_key::SettingKey},
        iprelude::CatchInfra,
        prelude::{AppContext, FromContext, InfrastructureError},
        shared::infrastructure::database::Connection,
    };

    pub struct SurrealRepository(Connection);

    impl FromContext for SurrealRepository {
        fn from_context(ctx: &AppContext) -> Self {
            Self(ctx.provide())
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn set(&self, key: SettingKey, value: String) -> Result<(), InfrastructureError> {
            // UPDATE on a record id upserts, which is exactly what a
            // keyed setting wants.
            self.0
                .query("UPDATE type::thing('setting', $key) SET value = $value")
                .bind(("key", key.as_str()))
                .bind(("value", value))
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            Ok(())
        }

        async fn get(&self, key: SettingKey) -> Result<Option<String>, InfrastructureError> {
            let mut response = self
                .0
                .query("SELECT VALUE value FROM type::thing('setting', $key)")
                .bind(("key", key.as_str()))
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            response.take(0).catch_infra()
        }
    }
}
