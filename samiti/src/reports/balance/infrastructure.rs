pub mod repository {
    use samiti_core::Amount;

    use crate::{
        iprelude::{lenient_amount, CatchInfra},
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::balance::domain::repository::{AmountColumn, Repository},
        shared::infrastructure::database::Connection,
    };

    pub struct SurrealRepository(Connection);

    impl FromContext for SurrealRepository {
        fn from_context(ctx: &AppContext) -> Self {
            Self(ctx.provide())
        }
    }

    #[derive(serde::Deserialize)]
    struct AmountDto {
        #[serde(default, deserialize_with = "lenient_amount")]
        amount: Option<Amount>,
    }

    fn collect(rows: Vec<AmountDto>) -> AmountColumn {
        let mut column = AmountColumn::default();

        for row in rows {
            match row.amount {
                Some(amount) => column.amounts.push(amount),
                None => column.skipped += 1,
            }
        }

        column
    }

    impl SurrealRepository {
        async fn amount_column(&self, query: &str) -> Result<AmountColumn, InfrastructureError> {
            let mut response = self
                .0
                .query(query)
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let rows: Vec<AmountDto> = response.take(0).catch_infra()?;
            Ok(collect(rows))
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn approved_deposits(&self) -> Result<AmountColumn, InfrastructureError> {
            self.amount_column("SELECT amount FROM deposit WHERE approved = true")
                .await
        }

        async fn paid_fines(&self) -> Result<AmountColumn, InfrastructureError> {
            self.amount_column("SELECT amount FROM fine WHERE status = 'paid'")
                .await
        }

        async fn expenses(&self) -> Result<AmountColumn, InfrastructureError> {
            self.amount_column("SELECT amount FROM expense").await
        }
    }
}
