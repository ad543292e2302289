pub mod repository {
    use samiti_core::{Amount, DepositId, MemberId};

    use crate::{
        backoffice::deposits::domain::{
            deposit::Deposit,
            recent_deposit::RecentDeposit,
            repository::{Repository, UpdateError},
        },
        date::Datetime,
        iprelude::{CatchApp, CatchInfra, MapResponse},
        prelude::{AppContext, AppError, FromContext},
        shared::{
            domain::errors::UniqueSaveError,
            infrastructure::{
                database::{Connection, Entity, EntityKey},
                errors::InfrastructureError,
            },
        },
    };

    pub struct SurrealRepository(Connection);

    impl FromContext for SurrealRepository {
        fn from_context(ctx: &AppContext) -> Self {
            Self(ctx.provide())
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn save(
            &self,
            id: DepositId,
            deposit: Deposit,
        ) -> Result<(), AppError<UniqueSaveError>> {
            self.0
                .query(
                    "CREATE ONLY type::thing('deposit', $id)
                    SET member_id = $member_id, amount = $amount,
                        description = $description, approved = $approved,
                        created_at = $created_at",
                )
                .bind(("id", id))
                .bind(("member_id", EntityKey(deposit.member_id)))
                .bind(("amount", deposit.amount))
                .bind(("description", deposit.description))
                .bind(("approved", deposit.approved))
                .bind((
                    "created_at",
                    surrealdb::sql::Datetime::from(deposit.created_at),
                ))
                .await
                .catch_app()?
                .check()
                .catch_app()
                .map_response()
        }

        async fn approve(&self, id: DepositId) -> Result<(), UpdateError> {
            let mut response = self
                .0
                .query("UPDATE deposit SET approved = true WHERE id = $id RETURN AFTER")
                .bind(("id", EntityKey(id)))
                .await
                .map_err(|e| UpdateError::Unspecified(e.into()))?;

            let updated: Option<serde_json::Value> = response
                .take(0)
                .map_err(|e| UpdateError::Unspecified(e.into()))?;

            match updated {
                Some(_) => Ok(()),
                None => Err(UpdateError::NotFound),
            }
        }

        async fn get_recent(
            &self,
            limit: usize,
        ) -> Result<Vec<RecentDeposit>, InfrastructureError> {
            let mut response = self
                .0
                .query(
                    "SELECT *, member_id.name AS member_name, member_id.avatar AS member_avatar
                    FROM deposit ORDER BY created_at DESC LIMIT $limit",
                )
                .bind(("limit", limit))
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let deposits: Vec<Entity<DepositId, RecentDto>> = response.take(0).catch_infra()?;

            Ok(deposits
                .into_iter()
                .map(|Entity(id, dto)| RecentDeposit {
                    id,
                    member_id: dto.member_id.0,
                    member_name: dto.member_name,
                    member_avatar: dto.member_avatar,
                    amount: dto.amount,
                    description: dto.description,
                    created_at: dto.created_at,
                })
                .collect())
        }
    }

    #[derive(serde::Deserialize)]
    struct RecentDto {
        member_id: EntityKey<MemberId>,
        member_name: Option<String>,
        member_avatar: Option<String>,
        amount: Amount,
        description: String,
        created_at: Datetime,
    }

    #[cfg(all(test, feature = "db_test"))]
    mod test {
        use chrono::{TimeZone, Utc};

        use super::*;
        use crate::backoffice::members::domain::{
            member::Member, repository::Repository as _, role::Role, status::Status,
        };
        use crate::backoffice::members::infrastructure::repository::SurrealRepository as MembersRepository;

        #[tokio::test]
        async fn recent_lists_newest_first_with_member_join() {
            let db = crate::shared::infrastructure::database::connect().await.unwrap();
            let ctx = AppContext::new(db);

            let members: MembersRepository = ctx.provide();
            let member_id = samiti_core::MemberId::new();
            members
                .save(
                    member_id,
                    Member {
                        name: Some("karim".to_string().into()),
                        avatar: None,
                        role: Role::Member,
                        status: Status::Active,
                        created_at: None,
                    },
                )
                .await
                .unwrap();

            let repo: SurrealRepository = ctx.provide();
            let deposit = |day, amount: &str| Deposit {
                member_id,
                amount: amount.parse().unwrap(),
                description: String::new(),
                created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
                approved: true,
            };

            let older = DepositId::new();
            repo.save(older, deposit(1, "100")).await.unwrap();
            let newer = DepositId::new();
            repo.save(newer, deposit(20, "250")).await.unwrap();

            let recent = repo.get_recent(10).await.unwrap();

            assert_eq!(recent.len(), 2);
            assert_eq!(recent[0].id, newer);
            assert_eq!(recent[0].member_name.as_deref(), Some("karim"));
            assert_eq!(recent[1].id, older);

            let only_one = repo.get_recent(1).await.unwrap();
            assert_eq!(only_one.len(), 1);
            assert_eq!(only_one[0].id, newer);
        }
    }
}
