pub mod snapshot {
    use crate::{
        backoffice::deposits::domain::recent_deposit::RecentDeposit,
        reports::{
            balance::domain::totals::{GlobalBalance, SocietyFund},
            monthly_ledger::application::get_report::MonthlyLedger,
        },
    };

    /// Everything the landing view shows, computed for the current month.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct Dashboard {
        pub ledger: MonthlyLedger,
        pub balance: GlobalBalance,
        pub fund: SocietyFund,
        pub notice: Option<String>,
        /// Newest deposits first, member joined in.
        pub activity: Vec<RecentDeposit>,
    }
}
