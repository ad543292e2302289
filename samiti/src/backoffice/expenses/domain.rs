pub mod expense {
    use samiti_core::Amount;

    use crate::date::Datetime;

    /// Spending out of the society fund.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct Expense {
        pub amount: Amount,
        pub description: String,
        #[serde(default)]
        pub created_at: Option<Datetime>,
    }
}

pub mod repository {
    use samiti_core::ExpenseId;

    use crate::shared::{
        domain::errors::UniqueSaveError,
        infrastructure::errors::{AppError, InfrastructureError},
    };

    use super::expense::Expense;

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn save(&self, id: ExpenseId, expense: Expense)
            -> Result<(), AppError<UniqueSaveError>>;

        async fn get_all(&self) -> Result<Vec<(ExpenseId, Expense)>, InfrastructureError>;
    }
}
