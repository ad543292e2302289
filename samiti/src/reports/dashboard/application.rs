pub mod cache {
    use samiti_core::MonthKey;
    use tokio::sync::watch;

    use crate::{
        backoffice::{
            deposits::application::get_recent::GetRecent,
            settings::{application::get_one::GetOne, domain::setting_key::SettingKey},
        },
        date::Timezone,
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::{
            balance::application::{
                global_balance::GetGlobalBalance, society_fund::GetSocietyFund,
            },
            dashboard::domain::snapshot::Dashboard,
            monthly_ledger::application::get_report::GetReport,
        },
        shared::application::logging::LogService,
    };

    const ACTIVITY_LIMIT: usize = 10;

    struct Compute {
        ledger: GetReport,
        balance: GetGlobalBalance,
        fund: GetSocietyFund,
        settings: GetOne,
        activity: GetRecent,
    }

    impl FromContext for Compute {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                ledger: ctx.provide(),
                balance: ctx.provide(),
                fund: ctx.provide(),
                settings: ctx.provide(),
                activity: ctx.provide(),
            }
        }
    }

    impl Compute {
        async fn run(&self) -> Result<Dashboard, InfrastructureError> {
            let month = MonthKey::of(Timezone::now());

            Ok(Dashboard {
                ledger: self.ledger.run(month).await?,
                balance: self.balance.run().await?,
                fund: self.fund.run().await?,
                notice: self.settings.run(SettingKey::Notice).await?,
                activity: self.activity.run(ACTIVITY_LIMIT).await?,
            })
        }
    }

    /// Always-warm dashboard. A background task recomputes the snapshot
    /// whenever any table changes and pushes it through a watch channel,
    /// so readers never wait on the database and stale snapshots are
    /// overwritten rather than served.
    #[derive(Clone)]
    pub struct DashboardCache {
        rx: watch::Receiver<Option<Dashboard>>,
    }

    impl DashboardCache {
        pub fn spawn(ctx: &AppContext) -> Self {
            let (tx, rx) = watch::channel(None);

            let compute: Compute = ctx.provide();
            let log: LogService = ctx.provide();
            let mut changes = ctx.subscribe_changes();

            tokio::spawn(async move {
                loop {
                    match compute.run().await {
                        Ok(dashboard) => {
                            if tx.send(Some(dashboard)).is_err() {
                                break;
                            }
                        }
                        Err(e) => log.error(e),
                    }

                    if changes.recv().await.is_none() {
                        break;
                    }
                }
            });

            Self { rx }
        }

        pub fn latest(&self) -> Option<Dashboard> {
            self.rx.borrow().clone()
        }
    }

    #[cfg(all(test, feature = "db_test"))]
    mod tests {
        use samiti_core::Amount;

        use crate::{
            backoffice::{
                deposits::application::add_one::{AddOne, CreateDeposit},
                members::application::register_one::RegisterOne,
            },
            prelude::AppContext,
            shared::infrastructure::database,
        };

        use super::DashboardCache;

        #[tokio::test]
        async fn refreshes_after_a_deposit() {
            let connection = database::connect().await.unwrap();
            let ctx = AppContext::new(connection);

            let cache = DashboardCache::spawn(&ctx);
            let mut rx = cache.rx.clone();

            rx.changed().await.unwrap();
            assert_eq!(cache.latest().unwrap().balance.total, Amount::ZERO);

            let register: RegisterOne = ctx.provide();
            let member_id = register.run(Some("Asha".parse().unwrap())).await.unwrap();

            let add: AddOne = ctx.provide();
            add.run(CreateDeposit {
                member_id,
                amount: "500".parse().unwrap(),
                description: "monthly".to_owned(),
                occurred_at: None,
            })
            .await
            .unwrap();

            loop {
                rx.changed().await.unwrap();
                let dashboard = cache.latest().unwrap();
                if dashboard.balance.total == "500".parse().unwrap() {
                    assert_eq!(dashboard.activity.len(), 1);
                    assert_eq!(dashboard.activity[0].member_id, member_id);
                    break;
                }
            }
        }
    }
}
