use crate::shared::{
    domain::changes::{ChangePort, ChangeStream},
    infrastructure::{database::Connection, errors::InfrastructureError},
};

#[derive(Clone)]
pub struct AppContext {
    db: DbContext,
    changes: ChangePort,
}

#[derive(Clone)]
pub struct DbContext(Connection);

impl DbContext {
    pub(crate) fn connection(&self) -> Connection {
        self.0.clone()
    }
}

#[cfg(all(test, feature = "db_test"))]
impl AppContext {
    pub(crate) fn new(connection: Connection) -> Self {
        Self {
            db: DbContext(connection),
            changes: ChangePort::channel(),
        }
    }
}

pub async fn setup() -> Result<AppContext, InfrastructureError> {
    let db = crate::shared::infrastructure::database::connect().await?;

    Ok(AppContext {
        db: DbContext(db),
        changes: ChangePort::channel(),
    })
}

/// Service wiring: every application service and repository knows how to
/// build itself out of the context.
pub trait FromContext {
    fn from_context(ctx: &AppContext) -> Self;
}

impl AppContext {
    pub fn provide<S: FromContext>(&self) -> S {
        S::from_context(self)
    }

    pub fn subscribe_changes(&self) -> ChangeStream {
        self.changes.subscribe()
    }
}

impl FromContext for Connection {
    fn from_context(ctx: &AppContext) -> Self {
        ctx.db.connection()
    }
}

impl FromContext for ChangePort {
    fn from_context(ctx: &AppContext) -> Self {
        ctx.changes.clone()
    }
}

mod provides_config {
    use super::{AppContext, FromContext};

    use crate::backoffice::{
        deposits::{
            domain::repository::Repository as DepositsRepository,
            infrastructure::repository::SurrealRepository as DepositsSurrealRepository,
        },
        expenses::{
            domain::repository::Repository as ExpensesRepository,
            infrastructure::repository::SurrealRepository as ExpensesSurrealRepository,
        },
        fines::{
            domain::repository::Repository as FinesRepository,
            infrastructure::repository::SurrealRepository as FinesSurrealRepository,
        },
        members::{
            domain::repository::Repository as MembersRepository,
            infrastructure::repository::SurrealRepository as MembersSurrealRepository,
        },
        settings::{
            domain::repository::Repository as SettingsRepository,
            infrastructure::repository::SurrealRepository as SettingsSurrealRepository,
        },
    };

    macro_rules! provide_map (($($service: path: $real_service: path),* $(,)*) => {
        $(
        impl FromContext for Box<dyn $service> {
            fn from_context(ctx: &AppContext) -> Self {
                Box::new(<$real_service as FromContext>::from_context(ctx))
            }
        }
        )*
    });

    provide_map! {
        MembersRepository: MembersSurrealRepository,
        DepositsRepository: DepositsSurrealRepository,
        FinesRepository: FinesSurrealRepository,
        ExpensesRepository: ExpensesSurrealRepository,
        SettingsRepository: SettingsSurrealRepository,
        crate::reports::monthly_ledger::domain::repository::Repository:
            crate::reports::monthly_ledger::infrastructure::repository::SurrealRepository,
        crate::reports::balance::domain::repository::Repository:
            crate::reports::balance::infrastructure::repository::SurrealRepository,
    }

    impl FromContext for Box<dyn crate::shared::domain::logging::LogRepository> {
        fn from_context(_ctx: &AppContext) -> Self {
            Box::new(crate::shared::infrastructure::logging::FileLogRepository)
        }
    }
}
