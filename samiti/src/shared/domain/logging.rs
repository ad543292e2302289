use crate::shared::infrastructure::errors::InfrastructureError;

pub trait LogRepository: 'static + Send + Sync {
    fn log(&self, message: std::fmt::Arguments) -> Result<(), InfrastructureError>;
}
