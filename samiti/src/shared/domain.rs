pub mod changes;
pub mod context;
pub mod logging;

pub mod errors {
    #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    pub enum UniqueSaveError {
        AlreadyExists,
    }
}
