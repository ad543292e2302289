use axum::{
    http::StatusCode,
    routing::{get, patch, post},
    Router,
};
use clap::Parser;
use samiti::{
    prelude::AppContext, reports::dashboard::application::cache::DashboardCache,
    shared::domain::context,
};

mod prelude;

#[derive(clap::Parser)]
struct Args {
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[derive(Clone)]
struct AppState {
    ctx: AppContext,
    dashboard: DashboardCache,
}

fn main() {
    use tokio::runtime::Runtime;
    let args = Args::parse();
    Runtime::new().unwrap().block_on(serve(args.port));
}

async fn serve(port: u16) {
    let ctx = context::setup().await.expect("To setup context");
    let dashboard = DashboardCache::spawn(&ctx);

    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/members", get(members::list).post(members::register))
        .route("/members/:id/approve", post(members::approve))
        .route("/members/:id", patch(members::update_profile))
        .route("/deposits", post(deposits::add))
        .route("/deposits/:id/approve", post(deposits::approve))
        .route("/fines", post(fines::assess))
        .route("/fines/unpaid", get(fines::list_unpaid))
        .route("/fines/:id/pay", post(fines::pay))
        .route("/expenses", get(expenses::list).post(expenses::add))
        .route("/settings/:key", get(settings::get_one).put(settings::set_one))
        .route("/reports/monthly", get(reports::monthly))
        .route("/reports/balance", get(reports::balance))
        .route("/reports/fund", get(reports::fund))
        .route("/reports/dashboard", get(reports::dashboard))
        .with_state(AppState { ctx, dashboard });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("To bind port");
    axum::serve(listener, app).await.expect("To serve");
}

mod members {
    use axum::{extract::{Path, State}, http::StatusCode, Json};
    use samiti::backoffice::members::{
        application::{
            approve_one::ApproveOne, get_all::GetAll, register_one::RegisterOne,
            update_profile::UpdateProfile,
        },
        domain::{member::Member, member_name::MemberName},
    };
    use samiti_core::MemberId;

    use crate::prelude::*;
    use crate::AppState;

    #[derive(serde::Deserialize)]
    pub(crate) struct RegisterReq {
        name: Option<MemberName>,
    }

    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<Entity<MemberId, Member>>>, StatusCode> {
        let service: GetAll = state.ctx.provide();
        service.run().await.catch_infra(&state.ctx).into_json()
    }

    #[axum::debug_handler]
    pub async fn register(
        State(state): State<AppState>,
        payload: Option<Json<RegisterReq>>,
    ) -> Result<Json<MemberId>, StatusCode> {
        let service: RegisterOne = state.ctx.provide();
        let name = payload.and_then(|p| p.0.name);

        service
            .run(name)
            .await
            .catch_infra(&state.ctx)?
            .map(Json)
            .map_err(|_| StatusCode::CONFLICT)
    }

    pub async fn approve(
        State(state): State<AppState>,
        Path(id): Path<MemberId>,
    ) -> Result<StatusCode, StatusCode> {
        let service: ApproveOne = state.ctx.provide();
        service.run(id).await.catch_update().catch_infra(&state.ctx)
    }

    #[derive(serde::Deserialize)]
    pub(crate) struct ProfileReq {
        name: Option<MemberName>,
        avatar: Option<String>,
    }

    #[axum::debug_handler]
    pub async fn update_profile(
        State(state): State<AppState>,
        Path(id): Path<MemberId>,
        Json(payload): Json<ProfileReq>,
    ) -> Result<StatusCode, StatusCode> {
        let service: UpdateProfile = state.ctx.provide();
        service
            .run(id, payload.name, payload.avatar)
            .await
            .catch_update()
            .catch_infra(&state.ctx)
    }
}

mod deposits {
    use axum::{extract::{Path, State}, http::StatusCode, Json};
    use samiti::{
        backoffice::deposits::application::{
            add_one::{AddOne, CreateDeposit},
            approve_one::ApproveOne,
        },
        date::Datetime,
    };
    use samiti_core::{Amount, DepositId, MemberId};

    use crate::prelude::*;
    use crate::AppState;

    #[derive(serde::Deserialize)]
    pub(crate) struct DepositReq {
        member_id: MemberId,
        amount: String,
        #[serde(default)]
        description: String,
        occurred_at: Option<Datetime>,
    }

    #[axum::debug_handler]
    pub async fn add(
        State(state): State<AppState>,
        Json(payload): Json<DepositReq>,
    ) -> Result<Json<DepositId>, StatusCode> {
        let amount: Amount = payload.amount.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

        let service: AddOne = state.ctx.provide();
        service
            .run(CreateDeposit {
                member_id: payload.member_id,
                amount,
                description: payload.description,
                occurred_at: payload.occurred_at,
            })
            .await
            .catch_infra(&state.ctx)?
            .map(Json)
            .map_err(|_| StatusCode::CONFLICT)
    }

    pub async fn approve(
        State(state): State<AppState>,
        Path(id): Path<DepositId>,
    ) -> Result<StatusCode, StatusCode> {
        let service: ApproveOne = state.ctx.provide();
        service.run(id).await.catch_update().catch_infra(&state.ctx)
    }
}

mod fines {
    use axum::{extract::{Path, State}, http::StatusCode, Json};
    use samiti::backoffice::fines::{
        application::{
            assess_one::{AssessFine, AssessOne},
            get_unpaid::GetUnpaid,
            mark_paid::MarkPaid,
        },
        domain::fine::Fine,
    };
    use samiti_core::{Amount, FineId, MemberId, MonthKey};

    use crate::prelude::*;
    use crate::AppState;

    #[derive(serde::Deserialize)]
    pub(crate) struct FineReq {
        member_id: MemberId,
        amount: String,
        #[serde(default)]
        description: String,
        month: String,
    }

    #[axum::debug_handler]
    pub async fn assess(
        State(state): State<AppState>,
        Json(payload): Json<FineReq>,
    ) -> Result<Json<FineId>, StatusCode> {
        let amount: Amount = payload.amount.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        let month: MonthKey = payload.month.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

        let service: AssessOne = state.ctx.provide();
        service
            .run(AssessFine {
                member_id: payload.member_id,
                amount,
                description: payload.description,
                month,
            })
            .await
            .catch_infra(&state.ctx)?
            .map(Json)
            .map_err(|_| StatusCode::CONFLICT)
    }

    pub async fn pay(
        State(state): State<AppState>,
        Path(id): Path<FineId>,
    ) -> Result<StatusCode, StatusCode> {
        let service: MarkPaid = state.ctx.provide();
        service.run(id).await.catch_update().catch_infra(&state.ctx)
    }

    pub async fn list_unpaid(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<Entity<FineId, Fine>>>, StatusCode> {
        let service: GetUnpaid = state.ctx.provide();
        service.run().await.catch_infra(&state.ctx).into_json()
    }
}

mod expenses {
    use axum::{extract::State, http::StatusCode, Json};
    use samiti::backoffice::expenses::{
        application::{add_one::AddOne, get_all::GetAll},
        domain::expense::Expense,
    };
    use samiti_core::{Amount, ExpenseId};

    use crate::prelude::*;
    use crate::AppState;

    #[derive(serde::Deserialize)]
    pub(crate) struct ExpenseReq {
        amount: String,
        #[serde(default)]
        description: String,
    }

    #[axum::debug_handler]
    pub async fn add(
        State(state): State<AppState>,
        Json(payload): Json<ExpenseReq>,
    ) -> Result<Json<ExpenseId>, StatusCode> {
        let amount: Amount = payload.amount.parse().map_err(|_| StatusCode::BAD_REQUEST)?;

        let service: AddOne = state.ctx.provide();
        service
            .run(amount, payload.description)
            .await
            .catch_infra(&state.ctx)?
            .map(Json)
            .map_err(|_| StatusCode::CONFLICT)
    }

    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<Entity<ExpenseId, Expense>>>, StatusCode> {
        let service: GetAll = state.ctx.provide();
        service.run().await.catch_infra(&state.ctx).into_json()
    }
}

mod settings {
    use axum::{extract::{Path, State}, http::StatusCode, Json};
    use samiti::backoffice::settings::{
        application::{get_one::GetOne, set_one::SetOne},
        domain::setting_key::SettingKey,
    };

    use crate::prelude::*;
    use crate::AppState;

    fn parse_key(key: &str) -> Result<SettingKey, StatusCode> {
        key.parse().map_err(|_| StatusCode::BAD_REQUEST)
    }

    pub async fn get_one(
        State(state): State<AppState>,
        Path(key): Path<String>,
    ) -> Result<Json<Option<String>>, StatusCode> {
        let key = parse_key(&key)?;
        let service: GetOne = state.ctx.provide();
        service.run(key).await.catch_infra(&state.ctx).map(Json)
    }

    #[derive(serde::Deserialize)]
    pub(crate) struct SetReq {
        value: String,
    }

    #[axum::debug_handler]
    pub async fn set_one(
        State(state): State<AppState>,
        Path(key): Path<String>,
        Json(payload): Json<SetReq>,
    ) -> Result<StatusCode, StatusCode> {
        let key = parse_key(&key)?;
        let service: SetOne = state.ctx.provide();
        service
            .run(key, payload.value)
            .await
            .catch_infra(&state.ctx)?;

        Ok(StatusCode::OK)
    }
}

mod reports {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        Json,
    };
    use samiti::{
        date::Timezone,
        reports::{
            balance::{
                application::{global_balance::GetGlobalBalance, society_fund::GetSocietyFund},
                domain::totals::{GlobalBalance, SocietyFund},
            },
            dashboard::domain::snapshot::Dashboard,
            monthly_ledger::application::get_report::{GetReport, MonthlyLedger},
        },
    };
    use samiti_core::MonthKey;

    use crate::prelude::*;
    use crate::AppState;

    #[derive(serde::Deserialize)]
    pub(crate) struct MonthQuery {
        month: Option<String>,
    }

    pub async fn monthly(
        State(state): State<AppState>,
        Query(query): Query<MonthQuery>,
    ) -> Result<Json<MonthlyLedger>, StatusCode> {
        let month = match query.month {
            Some(raw) => raw.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
            None => MonthKey::of(Timezone::now()),
        };

        let service: GetReport = state.ctx.provide();
        service.run(month).await.catch_infra(&state.ctx).map(Json)
    }

    pub async fn balance(
        State(state): State<AppState>,
    ) -> Result<Json<GlobalBalance>, StatusCode> {
        let service: GetGlobalBalance = state.ctx.provide();
        service.run().await.catch_infra(&state.ctx).map(Json)
    }

    pub async fn fund(State(state): State<AppState>) -> Result<Json<SocietyFund>, StatusCode> {
        let service: GetSocietyFund = state.ctx.provide();
        service.run().await.catch_infra(&state.ctx).map(Json)
    }

    pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>, StatusCode> {
        // None only before the very first computation lands
        state
            .dashboard
            .latest()
            .map(Json)
            .ok_or(StatusCode::SERVICE_UNAVAILABLE)
    }
}
