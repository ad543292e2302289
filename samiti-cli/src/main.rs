mod prelude {
    pub use crate::error::LogAndErr;
    pub use crate::error::MapAppErr;
}

mod error {
    use samiti::shared::{
        domain::context::AppContext,
        infrastructure::errors::{AppError, InfrastructureError},
    };

    pub struct PanicError(InfrastructureError);

    impl PanicError {
        pub fn new(err: InfrastructureError) -> Self {
            Self(err)
        }

        pub fn into_final_report(self, ctx: &AppContext) -> miette::Report {
            let service = ctx.provide::<samiti::shared::application::logging::LogService>();
            service.error(self.0);

            miette::diagnostic! {
                "Unhandable error, logging error"
            }
            .into()
        }
    }

    pub trait LogAndErr<T> {
        fn log_err(self, ctx: &AppContext) -> Result<T, miette::Error>;
    }

    impl<T> LogAndErr<T> for Result<T, InfrastructureError> {
        fn log_err(self, ctx: &AppContext) -> Result<T, miette::Error> {
            self.map_err(|e| {
                let err = PanicError::new(e);
                err.into_final_report(ctx)
            })
        }
    }

    pub trait MapAppErr<T, E> {
        fn map_app_err(
            self,
            ctx: &AppContext,
            mapper: impl FnOnce(E) -> miette::Error,
        ) -> Result<T, miette::Error>;
    }

    impl<T, E> MapAppErr<T, E> for Result<T, AppError<E>> {
        fn map_app_err(
            self,
            ctx: &AppContext,
            mapper: impl FnOnce(E) -> miette::Error,
        ) -> Result<T, miette::Error> {
            self.map_err(|e| match e {
                AppError::Infrastructure(e) => PanicError::new(e).into_final_report(ctx),
                AppError::App(e) => mapper(e),
            })
        }
    }

    pub fn not_found(what: &str) -> miette::Error {
        miette::diagnostic! {
            "{} not found", what
        }
        .into()
    }
}

mod member_commands {
    use samiti::{
        backoffice::members::{
            application::{approve_one::ApproveOne, get_all::GetAll, register_one::RegisterOne},
            domain::{member_name::MemberName, repository::UpdateError},
        },
        prelude::{AppContext, UniqueSaveError},
    };
    use samiti_core::MemberId;

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum MemberCommand {
        /// Creates a pending roster entry
        Register {
            #[arg(short, long)]
            name: Option<MemberName>,
        },
        /// Activates a pending member
        Approve { id: MemberId },
        List,
    }

    pub async fn run(ctx: &AppContext, command: MemberCommand) -> Result<(), miette::Error> {
        match command {
            MemberCommand::Register { name } => {
                let service: RegisterOne = ctx.provide();
                let id = service.run(name).await.map_app_err(ctx, |e| match e {
                    UniqueSaveError::AlreadyExists => miette::diagnostic! {
                        "Member already exists"
                    }
                    .into(),
                })?;

                println!("{}", id);
                Ok(())
            }

            MemberCommand::Approve { id } => {
                let service: ApproveOne = ctx.provide();
                service.run(id).await.map_err(|e| match e {
                    UpdateError::NotFound => crate::error::not_found("member"),
                    UpdateError::Unspecified(e) => {
                        crate::error::PanicError::new(e).into_final_report(ctx)
                    }
                })
            }

            MemberCommand::List => {
                let service: GetAll = ctx.provide();
                let members = service.run().await.log_err(ctx)?;

                for (id, member) in members {
                    let name = member
                        .name
                        .as_ref()
                        .map(|n| n.as_str())
                        .unwrap_or("(unnamed)");
                    println!("{} {} {} {}", id, name, member.status, member.role);
                }
                Ok(())
            }
        }
    }
}

mod deposit_commands {
    use samiti::{
        backoffice::deposits::{
            application::{
                add_one::{AddOne, CreateDeposit},
                approve_one::ApproveOne,
            },
            domain::repository::UpdateError,
        },
        date::Datetime,
        prelude::{AppContext, UniqueSaveError},
    };
    use samiti_core::{Amount, DepositId, MemberId};

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum DepositCommand {
        /// Records an approved dues payment for a member
        Add {
            #[arg(short, long)]
            member: MemberId,
            #[arg(short, long)]
            amount: Amount,
            #[arg(short, long, default_value = "")]
            description: String,
            /// Back-dates the payment, RFC 3339
            #[arg(long)]
            date: Option<Datetime>,
        },
        Approve {
            id: DepositId,
        },
    }

    pub async fn run(ctx: &AppContext, command: DepositCommand) -> Result<(), miette::Error> {
        match command {
            DepositCommand::Add {
                member,
                amount,
                description,
                date,
            } => {
                let service: AddOne = ctx.provide();
                let id = service
                    .run(CreateDeposit {
                        member_id: member,
                        amount,
                        description,
                        occurred_at: date,
                    })
                    .await
                    .map_app_err(ctx, |e| match e {
                        UniqueSaveError::AlreadyExists => miette::diagnostic! {
                            "Deposit already exists"
                        }
                        .into(),
                    })?;

                println!("{}", id);
                Ok(())
            }

            DepositCommand::Approve { id } => {
                let service: ApproveOne = ctx.provide();
                service.run(id).await.map_err(|e| match e {
                    UpdateError::NotFound => crate::error::not_found("deposit"),
                    UpdateError::Unspecified(e) => {
                        crate::error::PanicError::new(e).into_final_report(ctx)
                    }
                })
            }
        }
    }
}

mod fine_commands {
    use samiti::{
        backoffice::fines::{
            application::{
                assess_one::{AssessFine, AssessOne},
                get_unpaid::GetUnpaid,
                mark_paid::MarkPaid,
            },
            domain::repository::UpdateError,
        },
        prelude::{AppContext, UniqueSaveError},
    };
    use samiti_core::{Amount, FineId, MemberId, MonthKey};

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum FineCommand {
        /// Assesses a fine against a member for a month
        Assess {
            #[arg(short, long)]
            member: MemberId,
            #[arg(short, long)]
            amount: Amount,
            #[arg(short, long, default_value = "")]
            description: String,
            /// YYYY-MM
            #[arg(long)]
            month: MonthKey,
        },
        /// Marks a fine as collected
        Pay { id: FineId },
        /// Lists fines still to collect
        List,
    }

    pub async fn run(ctx: &AppContext, command: FineCommand) -> Result<(), miette::Error> {
        match command {
            FineCommand::Assess {
                member,
                amount,
                description,
                month,
            } => {
                let service: AssessOne = ctx.provide();
                let id = service
                    .run(AssessFine {
                        member_id: member,
                        amount,
                        description,
                        month,
                    })
                    .await
                    .map_app_err(ctx, |e| match e {
                        UniqueSaveError::AlreadyExists => miette::diagnostic! {
                            "Fine already exists"
                        }
                        .into(),
                    })?;

                println!("{}", id);
                Ok(())
            }

            FineCommand::Pay { id } => {
                let service: MarkPaid = ctx.provide();
                service.run(id).await.map_err(|e| match e {
                    UpdateError::NotFound => crate::error::not_found("fine"),
                    UpdateError::Unspecified(e) => {
                        crate::error::PanicError::new(e).into_final_report(ctx)
                    }
                })
            }

            FineCommand::List => {
                let service: GetUnpaid = ctx.provide();
                let fines = service.run().await.log_err(ctx)?;

                for (id, fine) in fines {
                    println!(
                        "{} {} {} {} {}",
                        id, fine.member_id, fine.month, fine.amount, fine.description
                    );
                }
                Ok(())
            }
        }
    }
}

mod setting_commands {
    use samiti::{
        backoffice::settings::{
            application::{get_one::GetOne, set_one::SetOne},
            domain::setting_key::SettingKey,
        },
        prelude::AppContext,
    };

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum SettingCommand {
        Get { key: SettingKey },
        Set { key: SettingKey, value: String },
    }

    pub async fn run(ctx: &AppContext, command: SettingCommand) -> Result<(), miette::Error> {
        match command {
            SettingCommand::Get { key } => {
                let service: GetOne = ctx.provide();
                match service.run(key).await.log_err(ctx)? {
                    Some(value) => println!("{}", value),
                    None => println!("(unset)"),
                }
                Ok(())
            }

            SettingCommand::Set { key, value } => {
                let service: SetOne = ctx.provide();
                service.run(key, value).await.log_err(ctx)
            }
        }
    }
}

mod report_commands {
    use samiti::{
        date::Timezone,
        prelude::AppContext,
        reports::{
            balance::application::{global_balance::GetGlobalBalance, society_fund::GetSocietyFund},
            monthly_ledger::{
                application::get_report::GetReport, domain::ledger::FineMark,
            },
        },
    };
    use samiti_core::MonthKey;

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum ReportCommand {
        /// Prints the ledger for a month, defaults to the current one
        Month {
            #[arg(long)]
            month: Option<MonthKey>,
        },
        /// Total of all approved deposits
        Balance,
        /// Collected fines minus expenses
        Fund,
    }

    pub async fn run(ctx: &AppContext, command: ReportCommand) -> Result<(), miette::Error> {
        match command {
            ReportCommand::Month { month } => {
                let month = month.unwrap_or_else(|| MonthKey::of(Timezone::now()));
                let service: GetReport = ctx.provide();
                let report = service.run(month).await.log_err(ctx)?;

                println!("ledger {}", report.month);
                for row in &report.rows {
                    let name = row.name.as_deref().unwrap_or("(unnamed)");
                    match row.fine_status {
                        FineMark::None => println!("{} paid {}", name, row.paid),
                        FineMark::Unpaid => println!(
                            "{} paid {}, owes fine {}",
                            name, row.paid, row.fine_amount
                        ),
                        FineMark::Paid => println!(
                            "{} paid {}, fine {} collected",
                            name, row.paid, row.fine_amount
                        ),
                    }
                }

                for warning in &report.warnings {
                    eprintln!(
                        "warning: {} {} has no readable amount, counted as 0",
                        warning.table, warning.id
                    );
                }
                Ok(())
            }

            ReportCommand::Balance => {
                let service: GetGlobalBalance = ctx.provide();
                let balance = service.run().await.log_err(ctx)?;

                println!("{}", balance.total);
                if balance.skipped > 0 {
                    eprintln!("warning: {} rows skipped", balance.skipped);
                }
                Ok(())
            }

            ReportCommand::Fund => {
                let service: GetSocietyFund = ctx.provide();
                let fund = service.run().await.log_err(ctx)?;

                println!(
                    "collected {} spent {} fund {}",
                    fund.collected, fund.spent, fund.fund
                );
                if fund.skipped > 0 {
                    eprintln!("warning: {} rows skipped", fund.skipped);
                }
                Ok(())
            }
        }
    }
}

mod expense_commands {
    use samiti::{
        backoffice::expenses::application::add_one::AddOne,
        prelude::{AppContext, UniqueSaveError},
    };
    use samiti_core::Amount;

    use crate::prelude::*;

    #[derive(clap::Subcommand)]
    pub enum ExpenseCommand {
        /// Records society spending out of the fund
        Add {
            #[arg(short, long)]
            amount: Amount,
            #[arg(short, long, default_value = "")]
            description: String,
        },
    }

    pub async fn run(ctx: &AppContext, command: ExpenseCommand) -> Result<(), miette::Error> {
        match command {
            ExpenseCommand::Add {
                amount,
                description,
            } => {
                let service: AddOne = ctx.provide();
                let id = service
                    .run(amount, description)
                    .await
                    .map_app_err(ctx, |e| match e {
                        UniqueSaveError::AlreadyExists => miette::diagnostic! {
                            "Expense already exists"
                        }
                        .into(),
                    })?;

                println!("{}", id);
                Ok(())
            }
        }
    }
}

use clap::Parser;
use samiti::shared::domain::context::{self, AppContext};

#[derive(clap::Parser)]
struct CliParser {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Member {
        #[command(subcommand)]
        command: member_commands::MemberCommand,
    },

    Deposit {
        #[command(subcommand)]
        command: deposit_commands::DepositCommand,
    },

    Fine {
        #[command(subcommand)]
        command: fine_commands::FineCommand,
    },

    Expense {
        #[command(subcommand)]
        command: expense_commands::ExpenseCommand,
    },

    Setting {
        #[command(subcommand)]
        command: setting_commands::SettingCommand,
    },

    Report {
        #[command(subcommand)]
        command: report_commands::ReportCommand,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let ctx = context::setup().await.expect("To setup context");

    let cli = CliParser::parse();
    run(&ctx, cli).await
}

async fn run(ctx: &AppContext, cli: CliParser) -> miette::Result<()> {
    match cli.command {
        Command::Member { command } => member_commands::run(ctx, command).await,
        Command::Deposit { command } => deposit_commands::run(ctx, command).await,
        Command::Fine { command } => fine_commands::run(ctx, command).await,
        Command::Expense { command } => expense_commands::run(ctx, command).await,
        Command::Setting { command } => setting_commands::run(ctx, command).await,
        Command::Report { command } => report_commands::run(ctx, command).await,
    }
}
