mod amount;
mod ids;
mod month;

/// Generic simple, understandable ID with custom length
mod tiny_id;

pub use amount::{Amount, SignedAmount};
pub use ids::{DepositId, ExpenseId, FineId, MemberId};
pub use month::MonthKey;

pub mod date {
    pub type Datetime = chrono::DateTime<chrono::Utc>;
    pub use chrono::Utc as Timezone;
}
