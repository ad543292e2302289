pub mod logging {
    use crate::{
        prelude::{AppContext, FromContext},
        shared::domain::logging::LogRepository,
    };

    pub struct LogService {
        repository: Box<dyn LogRepository>,
    }

    impl FromContext for LogService {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl LogService {
        pub fn error<E: std::fmt::Debug>(&self, error: E) {
            if let Err(log_error) = self.repository.log(format_args!("{:?}", error)) {
                println!("WARNING - unable to log error: {}", log_error);
                println!("original error: {:?}", error);
            }
        }
    }
}
