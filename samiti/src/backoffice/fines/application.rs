pub mod assess_one {
    use samiti_core::{Amount, FineId, MemberId, MonthKey};

    use crate::{
        backoffice::fines::domain::{fine::Fine, fine_status::FineStatus, repository::Repository},
        prelude::{AppContext, AppError, FromContext, UniqueSaveError},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct AssessFine {
        pub member_id: MemberId,
        pub amount: Amount,
        pub description: String,
        pub month: MonthKey,
    }

    pub struct AssessOne {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for AssessOne {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl AssessOne {
        pub async fn run(&self, fine: AssessFine) -> Result<FineId, AppError<UniqueSaveError>> {
            let id = FineId::new();
            let fine = Fine {
                member_id: fine.member_id,
                amount: fine.amount,
                description: fine.description,
                month: fine.month,
                status: FineStatus::Unpaid,
            };

            self.repository.save(id, fine).await?;
            self.changes.publish(Change::Fines);

            Ok(id)
        }
    }
}

pub mod mark_paid {
    use samiti_core::FineId;

    use crate::{
        backoffice::fines::domain::repository::{Repository, UpdateError},
        prelude::{AppContext, FromContext},
        shared::domain::changes::{Change, ChangePort},
    };

    pub struct MarkPaid {
        repository: Box<dyn Repository>,
        changes: ChangePort,
    }

    impl FromContext for MarkPaid {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
                changes: ctx.provide(),
            }
        }
    }

    impl MarkPaid {
        pub async fn run(&self, id: FineId) -> Result<(), UpdateError> {
            self.repository.mark_paid(id).await?;
            self.changes.publish(Change::Fines);
            Ok(())
        }
    }
}

pub mod get_unpaid {
    use samiti_core::FineId;

    use crate::{
        backoffice::fines::domain::{fine::Fine, repository::Repository},
        prelude::{AppContext, FromContext, InfrastructureError},
    };

    pub struct GetUnpaid {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetUnpaid {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetUnpaid {
        pub async fn run(&self) -> Result<Vec<(FineId, Fine)>, InfrastructureError> {
            self.repository.get_unpaid().await
        }
    }
}
