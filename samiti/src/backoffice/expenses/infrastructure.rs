pub mod repository {
    use samiti_core::ExpenseId;

    use crate::{
        backoffice::expenses::domain::{expense::Expense, repository::Repository},
        iprelude::{CatchApp, CatchInfra, MapResponse},
        prelude::{AppContext, AppError, FromContext},
        shared::{
            domain::errors::UniqueSaveError,
            infrastructure::{
                database::{Connection, Entity},
                errors::InfrastructureError,
            },
        },
    };

    pub struct SurrealRepository(Connection);

    impl FromContext for SurrealRepository {
        fn from_context(ctx: &AppContext) -> Self {
            Self(ctx.provide())
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn save(
            &self,
            id: ExpenseId,
            expense: Expense,
        ) -> Result<(), AppError<UniqueSaveError>> {
            self.0
                .query(
                    "CREATE ONLY type::thing('expense', $id)
                    SET amount = $amount, description = $description",
                )
                .bind(("id", id))
                .bind(("amount", expense.amount))
                .bind(("description", expense.description))
                .await
                .catch_app()?
                .check()
                .catch_app()
                .map_response()
        }

        async fn get_all(&self) -> Result<Vec<(ExpenseId, Expense)>, InfrastructureError> {
            let mut response = self
                .0
                .query("SELECT * FROM expense ORDER BY created_at DESC")
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let expenses: Vec<Entity<ExpenseId, Expense>> = response.take(0).catch_infra()?;
            Ok(expenses.into_iter().map(From::from).collect())
        }
    }
}
