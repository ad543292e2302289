pub mod backoffice;
pub mod reports;
pub mod shared;

pub mod prelude;
pub(crate) mod iprelude;

pub mod date {
    pub type Datetime = chrono::DateTime<chrono::Utc>;
    pub use chrono::Utc as Timezone;
}
