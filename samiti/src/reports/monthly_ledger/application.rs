pub mod get_report {
    use samiti_core::MonthKey;

    use crate::{
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::monthly_ledger::domain::{
            ledger::{self, LedgerRow},
            repository::{MissingAmount, Repository},
        },
    };

    #[derive(Debug, Clone, serde::Serialize)]
    pub struct MonthlyLedger {
        pub month: MonthKey,
        pub rows: Vec<LedgerRow>,
        pub warnings: Vec<MissingAmount>,
    }

    pub struct GetReport {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetReport {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetReport {
        pub async fn run(&self, month: MonthKey) -> Result<MonthlyLedger, InfrastructureError> {
            let rows = self.repository.month_rows(month).await?;

            Ok(MonthlyLedger {
                month,
                rows: ledger::aggregate(month, &rows.roster, &rows.deposits, &rows.fines),
                warnings: rows.warnings,
            })
        }
    }
}
