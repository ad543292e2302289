pub mod repository {
    use samiti_core::MemberId;

    use crate::{
        backoffice::members::domain::{
            member::Member,
            member_name::MemberName,
            repository::{Repository, UpdateError},
        },
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
            id: MemberId,
            member: Member,
        ) -> Result<(), AppError<UniqueSaveError>> {
            self.0
                .query(
                    "CREATE ONLY type::thing('member', $id)
                    SET name = $name, avatar = $avatar, role = $role, status = $status",
                )
                .bind(("id", id))
                .bind(("name", member.name))
                .bind(("avatar", member.avatar))
                .bind(("role", member.role))
                .bind(("status", member.status))
                .await
                .catch_app()?
                .check()
                .catch_app()
                .map_response()
        }

        async fn activate(&self, id: MemberId) -> Result<(), UpdateError> {
            let mut response = self
                .0
                .query("UPDATE member SET status = 'active' WHERE id = $id RETURN AFTER")
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

        async fn update_profile(
            &self,
            id: MemberId,
            name: Option<MemberName>,
            avatar: Option<String>,
        ) -> Result<(), UpdateError> {
            let mut response = self
                .0
                .query("UPDATE member SET name = $name, avatar = $avatar WHERE id = $id RETURN AFTER")
                .bind(("id", EntityKey(id)))
                .bind(("name", name))
                .bind(("avatar", avatar))
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

        async fn get_one(&self, id: MemberId) -> Result<Option<Member>, InfrastructureError> {
            let mut response = self
                .0
                .query("SELECT * FROM member WHERE id = $id")
                .bind(("id", EntityKey(id)))
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let member: Option<Member> = response.take(0).catch_infra()?;
            Ok(member)
        }

        async fn get_all(&self) -> Result<Vec<(MemberId, Member)>, InfrastructureError> {
            let mut response = self
                .0
                .query("SELECT * FROM member ORDER BY created_at")
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let members: Vec<Entity<MemberId, Member>> = response.take(0).catch_infra()?;
            Ok(members.into_iter().map(From::from).collect())
        }
    }

    #[cfg(all(test, feature = "db_test"))]
    mod test {
        use super::*;
        use crate::backoffice::members::domain::{role::Role, status::Status};

        #[tokio::test]
        async fn saves_and_reads_back() {
            let db = crate::shared::infrastructure::database::connect().await.unwrap();
            let ctx = AppContext::new(db);
            let repo: SurrealRepository = ctx.provide();

            let id = MemberId::new();
            let member = Member {
                name: Some("karim".to_string().into()),
                avatar: None,
                role: Role::Member,
                status: Status::Pending,
                created_at: None,
            };
            repo.save(id, member).await.unwrap();

            let found = repo.get_one(id).await.unwrap().expect("member saved");
            assert_eq!(found.status, Status::Pending);
        }
    }
}
