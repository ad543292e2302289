pub mod deposit {
    use samiti_core::{Amount, MemberId};

    use crate::date::Datetime;

    /// Monthly dues payment. Only approved deposits count toward any
    /// balance, the flag is the single gate (not the deposit date, not
    /// who entered it).
    #[derive(Debug, Clone)]
    pub struct Deposit {
        pub member_id: MemberId,
        pub amount: Amount,
        pub description: String,
        pub created_at: Datetime,
        pub approved: bool,
    }
}

pub mod recent_deposit {
    use samiti_core::{Amount, DepositId, MemberId};

    use crate::date::Datetime;

    /// Activity-feed read model: a deposit joined with the member it
    /// belongs to.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct RecentDeposit {
        pub id: DepositId,
        pub member_id: MemberId,
        pub member_name: Option<String>,
        pub member_avatar: Option<String>,
        pub amount: Amount,
        pub description: String,
        pub created_at: Datetime,
    }
}

pub mod repository {
    use samiti_core::DepositId;

    use crate::shared::{
        domain::errors::UniqueSaveError,
        infrastructure::errors::{AppError, InfrastructureError},
    };

    use super::{deposit::Deposit, recent_deposit::RecentDeposit};

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn save(&self, id: DepositId, deposit: Deposit)
            -> Result<(), AppError<UniqueSaveError>>;

        async fn approve(&self, id: DepositId) -> Result<(), UpdateError>;

        async fn get_recent(&self, limit: usize)
            -> Result<Vec<RecentDeposit>, InfrastructureError>;
    }

    #[derive(thiserror::Error, Debug)]
    pub enum UpdateError {
        #[error("deposit id not found")]
        NotFound,
        #[error(transparent)]
        Unspecified(InfrastructureError),
    }
}
