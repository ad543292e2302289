pub use crate::shared::domain::context::{AppContext, FromContext};
pub use crate::shared::domain::errors::UniqueSaveError;
pub use crate::shared::infrastructure::errors::{AppError, InfrastructureError};
