pub mod add_one {
    use samiti_core::{Amount, ExpenseId};

    use crate::{
        backoffice::expenses::domain::{expense::Expense, repository::Repository},
        prelude::{AppContext, AppError, FromContext, UniqueSaveError},
        shared::domain::changes::{Change, ChangePort},
    };

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
        pub async fn run(
            &self,
            amount: Amount,
            description: String,
        ) -> Result<ExpenseId, AppError<UniqueSaveError>> {
            let id = ExpenseId::new();
            let expense = Expense {
                amount,
                description,
                created_at: None,
            };

            self.repository.save(id, expense).await?;
            self.changes.publish(Change::Expenses);

            Ok(id)
        }
    }
}

pub mod get_all {
    use samiti_core::ExpenseId;

    use crate::{
        backoffice::expenses::domain::{expense::Expense, repository::Repository},
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
        pub async fn run(&self) -> Result<Vec<(ExpenseId, Expense)>, InfrastructureError> {
            self.repository.get_all().await
        }
    }
}
