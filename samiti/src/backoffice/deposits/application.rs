pub mod add_one {
    use samiti_core::{Amount, DepositId, MemberId};

    use crate::{
        backoffice::deposits::domain::{deposit::Deposit, repository::Repository},
        date::{Datetime, Timezone},
        prelude::{AppContext, AppError, FromContext, UniqueSaveError},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct CreateDeposit {
        pub member_id: MemberId,
        pub amount: Amount,
        pub description: String,
        /// Admins may back-date an entry; defaults to now.
        pub occurred_at: Option<Datetime>,
    }

    pub struct AddOne {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for AddOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl AddOne {
        /// Admin-entered deposits are approved at creation.
        pub async fn run(
            &self,
            deposit: CreateDeposit,
        ) -> Result<DepositId, AppError<UniqueSaveError>> {
            let id = DepositId::new();
            let deposit = Deposit {
                member_id: deposit.member_id,
                amount: deposit.amount,
                description: deposit.description,
                created_at: deposit.occurred_at.unwrap_or_else(Timezone::now),
                approved: true,
            };

            self.repository.save(id, deposit).await?;
            self.changes.publish(Change::Deposits);

            Ok(id)
        }
    }
}

pub mod get_recent {
    use crate::{
        backoffice::deposits::domain::{recent_deposit::RecentDeposit, repository::Repository},
        prelude::{AppContext, FromContext, InfrastructureError},
    };

    pub struct GetRecent {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetRecent {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetRecent {
        pub async fn run(&self, limit: usize) -> Result<Vec<RecentDeposit>, InfrastructureError> {
            self.repository.get_recent(limit).await
        }
    }
}

pub mod approve_one {
    use samiti_core::DepositId;

    use crate::{
        backoffice::deposits::domain::repository::{Repository, UpdateError},
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
        pub async fn run(&self, id: DepositId) -> Result<(), UpdateError> {
            self.repository.approve(id).await?;
            self.changes.publish(Change::Deposits);
            Ok(())
        }
    }
}
