pub mod repository {
    use samiti_core::{Amount, MemberId, MonthKey};

    use crate::{
        backoffice::fines::domain::fine_status::FineStatus,
        date::Datetime,
        iprelude::{lenient_amount, CatchInfra},
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::monthly_ledger::domain::{
            ledger::{DepositRecord, FineRecord, RosterEntry},
            repository::{MissingAmount, ReportRows, Repository},
        },
        shared::infrastructure::database::{Connection, Entity, EntityKey},
    };

    pub struct SurrealRepository(Connection);

    impl FromContext for SurrealRepository {
        fn from_context(ctx: &AppContext) -> Self {
            Self(ctx.provide())
        }
    }

    #[derive(serde::Deserialize)]
    struct RosterDto {
        name: Option<String>,
        avatar: Option<String>,
    }

    #[derive(serde::Deserialize)]
    struct DepositDto {
        member_id: EntityKey<MemberId>,
        #[serde(default, deserialize_with = "lenient_amount")]
        amount: Option<Amount>,
        approved: bool,
        created_at: Datetime,
    }

    #[derive(serde::Deserialize)]
    struct FineDto {
        member_id: EntityKey<MemberId>,
        #[serde(default, deserialize_with = "lenient_amount")]
        amount: Option<Amount>,
        month: u32,
        year: i32,
        status: FineStatus,
    }

    fn amount_or_warn<I: std::fmt::Display>(
        amount: Option<Amount>,
        table: &'static str,
        id: I,
        warnings: &mut Vec<MissingAmount>,
    ) -> Amount {
        match amount {
            Some(amount) => amount,
            None => {
                warnings.push(MissingAmount {
                    table,
                    id: id.to_string(),
                });
                Amount::ZERO
            }
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn month_rows(&self, month: MonthKey) -> Result<ReportRows, InfrastructureError> {
            let (start, end) = month.window();

            let mut response = self
                .0
                .query("SELECT * FROM member ORDER BY name ASC")
                .query("SELECT * FROM deposit WHERE created_at >= $start AND created_at < $end")
                .query("SELECT * FROM fine WHERE month = $month AND year = $year")
                .bind(("start", surrealdb::sql::Datetime::from(start)))
                .bind(("end", surrealdb::sql::Datetime::from(end)))
                .bind(("month", month.month()))
                .bind(("year", month.year()))
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let members: Vec<Entity<MemberId, RosterDto>> = response.take(0).catch_infra()?;
            let deposits: Vec<Entity<samiti_core::DepositId, DepositDto>> =
                response.take(1).catch_infra()?;
            let fines: Vec<Entity<samiti_core::FineId, FineDto>> =
                response.take(2).catch_infra()?;

            let mut rows = ReportRows::default();

            rows.roster = members
                .into_iter()
                .map(|Entity(id, dto)| RosterEntry {
                    member_id: id,
                    name: dto.name,
                    avatar: dto.avatar,
                })
                .collect();

            for Entity(id, dto) in deposits {
                rows.deposits.push(DepositRecord {
                    member_id: dto.member_id.0,
                    amount: amount_or_warn(dto.amount, "deposit", id, &mut rows.warnings),
                    approved: dto.approved,
                    created_at: dto.created_at,
                });
            }

            for Entity(id, dto) in fines {
                let month = MonthKey::new(dto.year, dto.month).map_err(InfrastructureError::new)?;

                rows.fines.push(FineRecord {
                    member_id: dto.member_id.0,
                    amount: amount_or_warn(dto.amount, "fine", id, &mut rows.warnings),
                    month,
                    status: dto.status,
                });
            }

            Ok(rows)
        }
    }

    #[cfg(test)]
    mod tests {
        use samiti_core::Amount;

        use super::{amount_or_warn, DepositDto};

        fn deposit_row(amount: serde_json::Value) -> serde_json::Value {
            let mut row = serde_json::json!({
                "member_id": { "tb": "member", "id": { "String": "aaa1" } },
                "approved": true,
                "created_at": "2024-03-10T12:00:00Z",
            });
            if !amount.is_null() {
                row["amount"] = amount;
            }
            row
        }

        #[test]
        fn malformed_amount_reads_as_missing() {
            let dto: DepositDto =
                serde_json::from_value(deposit_row(serde_json::json!("oops"))).unwrap();
            assert!(dto.amount.is_none());
        }

        #[test]
        fn absent_amount_reads_as_missing() {
            let dto: DepositDto =
                serde_json::from_value(deposit_row(serde_json::Value::Null)).unwrap();
            assert!(dto.amount.is_none());
        }

        #[test]
        fn readable_amount_survives() {
            let dto: DepositDto =
                serde_json::from_value(deposit_row(serde_json::json!(5_000_000))).unwrap();
            assert!(dto.amount.is_some());
        }

        #[test]
        fn missing_amount_counts_zero_and_warns() {
            let mut warnings = Vec::new();

            let amount = amount_or_warn(None, "deposit", "abc1", &mut warnings);

            assert_eq!(amount, Amount::ZERO);
            assert_eq!(warnings.len(), 1);
            assert_eq!(warnings[0].table, "deposit");
            assert_eq!(warnings[0].id, "abc1");
        }

        #[test]
        fn present_amount_does_not_warn() {
            let mut warnings = Vec::new();

            let amount = amount_or_warn(Some(Amount::ZERO), "fine", "abc1", &mut warnings);

            assert_eq!(amount, Amount::ZERO);
            assert!(warnings.is_empty());
        }
    }
}
