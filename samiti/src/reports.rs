pub mod balance;
pub mod dashboard;
pub mod monthly_ledger;
