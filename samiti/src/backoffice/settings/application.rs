pub mod set_one {
    use crate::{
        backoffice::settings::domain::{repository::Repository, setting_key::SettingKey},
        prelude::{AppContext, FromContext, InfrastructureError},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct SetOne {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for SetOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl SetOne {
        pub async fn run(&self, key: SettingKey, value: String) -> Result<(), InfrastructureError> {
            self.repository.set(key, value).await?;
            self.changes.publish(Change::Settings);

            Ok(())
        }
    }
}

pub mod get_one {
    use crate::{
        backoffice::settings::domain::{repository::Repository, setting_key::SettingKey},
        prelude::{AppContext, FromContext, InfrastructureError},
    };

    pub struct GetOne {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetOne {
        pub async fn run(&self, key: SettingKey) -> Result<Option<String>, InfrastructureError> {
            self.repository.get(key).await
        }
    }
}
