pub mod repository {
    use samiti_core::{Amount, FineId, MemberId, MonthKey};

    use crate::{
        backoffice::fines::domain::{
            fine::Fine,
            fine_status::FineStatus,
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

    #[derive(serde::Deserialize)]
    struct FineDto {
        member_id: EntityKey<MemberId>,
        amount: Amount,
        description: String,
        month: u32,
        year: i32,
        status: FineStatus,
    }

    impl FineDto {
        fn into_fine(self) -> Result<Fine, InfrastructureError> {
            let month = MonthKey::new(self.year, self.month).map_err(InfrastructureError::new)?;

            Ok(Fine {
                member_id: self.member_id.0,
                amount: self.amount,
                description: self.description,
                month,
                status: self.status,
            })
        }
    }

    #[async_trait::async_trait]
    impl Repository for SurrealRepository {
        async fn save(&self, id: FineId, fine: Fine) -> Result<(), AppError<UniqueSaveError>> {
            self.0
                .query(
                    "CREATE ONLY type::thing('fine', $id)
                    SET member_id = $member_id, amount = $amount,
                        description = $description, month = $month,
                        year = $year, status = $status",
                )
                .bind(("id", id))
                .bind(("member_id", EntityKey(fine.member_id)))
                .bind(("amount", fine.amount))
                .bind(("description", fine.description))
                .bind(("month", fine.month.month()))
                .bind(("year", fine.month.year()))
                .bind(("status", fine.status))
                .await
                .catch_app()?
                .check()
                .catch_app()
                .map_response()
        }

        async fn mark_paid(&self, id: FineId) -> Result<(), UpdateError> {
            let mut response = self
                .0
                .query("UPDATE fine SET status = 'paid' WHERE id = $id RETURN AFTER")
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

        async fn get_unpaid(&self) -> Result<Vec<(FineId, Fine)>, InfrastructureError> {
            let mut response = self
                .0
                .query("SELECT * FROM fine WHERE status = 'unpaid' ORDER BY created_at DESC")
                .await
                .catch_infra()?
                .check()
                .catch_infra()?;

            let fines: Vec<Entity<FineId, FineDto>> = response.take(0).catch_infra()?;

            fines
                .into_iter()
                .map(|Entity(id, dto)| Ok((id, dto.into_fine()?)))
                .collect()
        }
    }
}
