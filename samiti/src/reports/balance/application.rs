pub mod global_balance {
    use crate::{
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::balance::domain::{repository::Repository, totals::GlobalBalance},
    };

    pub struct GetGlobalBalance {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetGlobalBalance {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetGlobalBalance {
        pub async fn run(&self) -> Result<GlobalBalance, InfrastructureError> {
            let deposits = self.repository.approved_deposits().await?;

            Ok(GlobalBalance {
                total: deposits.total(),
                skipped: deposits.skipped,
            })
        }
    }
}

pub mod society_fund {
    use crate::{
        prelude::{AppContext, FromContext, InfrastructureError},
        reports::balance::domain::{repository::Repository, totals::SocietyFund},
    };

    pub struct GetSocietyFund {
        repository: Box<dyn Repository>,
    }

    impl FromContext for GetSocietyFund {
        fn from_context(ctx: &AppContext) -> Self {
            Self {
                repository: ctx.provide(),
            }
        }
    }

    impl GetSocietyFund {
        pub async fn run(&self) -> Result<SocietyFund, InfrastructureError> {
            let fines = self.repository.paid_fines().await?;
            let expenses = self.repository.expenses().await?;

            let collected = fines.total();
            let spent = expenses.total();

            Ok(SocietyFund {
                collected,
                spent,
                fund: collected.signed_sub(spent),
                skipped: fines.skipped + expenses.skipped,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use samiti_core::Amount;

        use crate::reports::balance::domain::repository::AmountColumn;

        fn column(amounts: &[&str]) -> AmountColumn {
            AmountColumn {
                amounts: amounts.iter().map(|s| s.parse().unwrap()).collect(),
                skipped: 0,
            }
        }

        #[test]
        fn fund_goes_negative_when_spending_exceeds_collection() {
            let fines = column(&["100", "50.5"]);
            let expenses = column(&["200"]);

            let fund = fines.total().signed_sub(expenses.total());

            assert!(fund.is_negative());
            assert_eq!(fund.to_string(), "-49.5");
        }

        #[test]
        fn empty_columns_total_zero() {
            let empty = AmountColumn::default();
            assert_eq!(empty.total(), Amount::ZERO);
        }
    }
}
