pub mod register_one {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::{
            member::Member, member_name::MemberName, repository::Repository, role::Role,
            status::Status,
        },
        prelude::{AppContext, AppError, FromContext, UniqueSaveError},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct RegisterOne {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for RegisterOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl RegisterOne {
        /// First sign-in: the profile starts pending and without admin
        /// rights, an admin promotes it later.
        pub async fn run(
            &self,
            name: Option<MemberName>,
        ) -> Result<MemberId, AppError<UniqueSaveError>> {
            let id = MemberId::new();
            let member = Member {
                name,
                avatar: None,
                role: Role::Member,
                status: Status::Pending,
                created_at: None,
            };

            self.repository.save(id, member).await?;
            self.changes.publish(Change::Members);

            Ok(id)
        }
    }
}

pub mod approve_one {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::repository::{Repository, UpdateError},
        prelude::{AppContext, FromContext},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct ApproveOne {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for ApproveOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl ApproveOne {
        pub async fn run(&self, id: MemberId) -> Result<(), UpdateError> {
            self.repository.activate(id).await?;
            self.changes.publish(Change::Members);
            Ok(())
        }
    }
}

pub mod update_profile {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::{
            member_name::MemberName,
            repository::{Repository, UpdateError},
        },
        prelude::{AppContext, FromContext},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct UpdateProfile {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for UpdateProfile {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl UpdateProfile {
        pub async fn run(
            &self,
            id: MemberId,
            name: Option<MemberName>,
            avatar: Option<String>,
        ) -> Result<(), UpdateError> {
            self.repository.update_profile(id, name, avatar).await?;
            self.changes.publish(Change::Members);
            Ok(())
        }
    }
}

pub mod get_all {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::{member::Member, repository::Repository},
        prelude::{AppContext, FromContext, InfrastructureError},
    };

    pub struct GetAll {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetAll {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetAll {
        pub async fn run(&self) -> Result<Vec<(MemberId, Member)>, InfrastructureError> {
            self.repository.get_all().await
        }
    }
}

pub mod get_one {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::{member::Member, repository::Repository},
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
        pub async fn run(&self, id: MemberId) -> Result<Option<Member>, InfrastructureError> {
            self.repository.get_one(id).await
        }
    }
}
