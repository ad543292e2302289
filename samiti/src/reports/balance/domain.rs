pub mod totals {
    use samiti_core::{Amount, SignedAmount};

    /// All approved deposits ever collected.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct GlobalBalance {
        pub total: Amount,
        /// Rows whose amount column could not be read and counted as zero.
        pub skipped: usize,
    }

    /// Collected fine money minus society spending. Goes negative when the
    /// society spends ahead of collection.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct SocietyFund {
        pub collected: Amount,
        pub spent: Amount,
        pub fund: SignedAmount,
        pub skipped: usize,
    }
}

pub mod repository {
    use samiti_core::Amount;

    use crate::shared::infrastructure::errors::InfrastructureError;

    /// One amount column read fail-soft: unreadable rows are dropped from
    /// `amounts` and tallied in `skipped`.
    #[derive(Debug, Default)]
    pub struct AmountColumn {
        pub amounts: Vec<Amount>,
        pub skipped: usize,
    }

    impl AmountColumn {
        pub fn total(&self) -> Amount {
            self.amounts.iter().copied().sum()
        }
    }

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn approved_deposits(&self) -> Result<AmountColumn, InfrastructureError>;

        async fn paid_fines(&self) -> Result<AmountColumn, InfrastructureError>;

        async fn expenses(&self) -> Result<AmountColumn, InfrastructureError>;
    }
}
