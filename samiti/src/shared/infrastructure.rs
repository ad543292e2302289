pub mod database;

pub mod errors {
    #[derive(Debug, thiserror::Error)]
    #[error("infrastructure error: {0}")]
    pub struct InfrastructureError(Box<dyn std::error::Error + Send + Sync + 'static>);

    impl InfrastructureError {
        pub fn new<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
            Self(Box::new(err))
        }
    }

    impl From<surrealdb::Error> for InfrastructureError {
        fn from(err: surrealdb::Error) -> Self {
            Self::new(err)
        }
    }

    impl From<std::io::Error> for InfrastructureError {
        fn from(err: std::io::Error) -> Self {
            Self::new(err)
        }
    }

    /// A failure is either a domain outcome the caller can react to, or an
    /// infrastructure fault it can only log.
    #[derive(Debug)]
    pub enum AppError<E> {
        App(E),
        Infrastructure(InfrastructureError),
    }

    impl<E> From<InfrastructureError> for AppError<E> {
        fn from(value: InfrastructureError) -> Self {
            Self::Infrastructure(value)
        }
    }
}

pub mod logging {
    use std::io::Write;

    use crate::shared::domain::logging::LogRepository;

    use super::errors::InfrastructureError;

    const FILE: &str = "samiti.log";

    pub struct FileLogRepository;

    impl LogRepository for FileLogRepository {
        fn log(&self, message: std::fmt::Arguments) -> Result<(), InfrastructureError> {
            let path = super::filesystem::create_local_path().join(FILE);
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;

            let now = crate::date::Timezone::now();
            writeln!(file, "ERROR {} - {}", now.format("%d/%m/%Y %H:%M"), message)?;

            Ok(())
        }
    }
}

pub mod filesystem {
    use std::path::PathBuf;

    pub fn create_local_path() -> PathBuf {
        use std::fs;

        let share_dir = std::env::var("XDG_DATA_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".local/share"))
            })
            .expect("To get share directory");
        let path = share_dir.join("samiti");

        fs::create_dir_all(&path).expect("To create samiti data directory");
        path
    }
}
