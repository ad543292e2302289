pub mod fine {
    use samiti_core::{Amount, MemberId, MonthKey};

    use super::fine_status::FineStatus;

    /// Penalty assessed against a member for a specific month. The month
    /// tag is whatever the assigning admin entered, it is not derived
    /// from any timestamp. A fine counts in the monthly ledger whether or
    /// not it has been collected; status only drives fund accounting and
    /// display.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct Fine {
        pub member_id: MemberId,
        pub amount: Amount,
        pub description: String,
        pub month: MonthKey,
        pub status: FineStatus,
    }
}

pub mod fine_status {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FineStatus {
        Unpaid,
        Paid,
    }

    impl std::fmt::Display for FineStatus {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Unpaid => write!(f, "unpaid"),
                Self::Paid => write!(f, "paid"),
            }
        }
    }
}

pub mod repository {
    use samiti_core::FineId;

    use crate::shared::{
        domain::errors::UniqueSaveError,
        infrastructure::errors::{AppError, InfrastructureError},
    };

    use super::fine::Fine;

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn save(&self, id: FineId, fine: Fine) -> Result<(), AppError<UniqueSaveError>>;

        async fn mark_paid(&self, id: FineId) -> Result<(), UpdateError>;

        async fn get_unpaid(&self) -> Result<Vec<(FineId, Fine)>, InfrastructureError>;
    }

    #[derive(thiserror::Error, Debug)]
    pub enum UpdateError {
        #[error("fine id not found")]
        NotFound,
        #[error(transparent)]
        Unspecified(InfrastructureError),
    }
}
