pub mod ledger {
    use samiti_core::{Amount, MemberId, MonthKey};

    use crate::{backoffice::fines::domain::fine_status::FineStatus, date::Datetime};

    /// What the ledger needs to know about a roster member.
    #[derive(Debug, Clone)]
    pub struct RosterEntry {
        pub member_id: MemberId,
        pub name: Option<String>,
        pub avatar: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct DepositRecord {
        pub member_id: MemberId,
        pub amount: Amount,
        pub approved: bool,
        pub created_at: Datetime,
    }

    #[derive(Debug, Clone)]
    pub struct FineRecord {
        pub member_id: MemberId,
        pub amount: Amount,
        pub month: MonthKey,
        pub status: FineStatus,
    }

    /// Fine column of a ledger row. `None` means no fine was assessed for
    /// that member and month at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FineMark {
        None,
        Unpaid,
        Paid,
    }

    impl From<FineStatus> for FineMark {
        fn from(status: FineStatus) -> Self {
            match status {
                FineStatus::Unpaid => Self::Unpaid,
                FineStatus::Paid => Self::Paid,
            }
        }
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct LedgerRow {
        pub member_id: MemberId,
        pub name: Option<String>,
        pub avatar: Option<String>,
        pub paid: Amount,
        pub fine_amount: Amount,
        pub fine_status: FineMark,
    }

    /// Computes one month of the society ledger. One row per roster member
    /// in all cases; a member with no activity gets a zero row. Deposits
    /// count only when approved and created inside the month window, fines
    /// only when tagged with exactly this month. Rows come out sorted by
    /// amount paid, highest first, ties keeping roster order. The report
    /// repository supplies the roster name-ascending, so tied members come
    /// out alphabetical (the admin roster listing orders by created_at
    /// instead; only this function's input order matters here).
    pub fn aggregate(
        month: MonthKey,
        roster: &[RosterEntry],
        deposits: &[DepositRecord],
        fines: &[FineRecord],
    ) -> Vec<LedgerRow> {
        let mut rows: Vec<LedgerRow> = roster
            .iter()
            .map(|entry| {
                let paid = deposits
                    .iter()
                    .filter(|deposit| {
                        deposit.approved
                            && deposit.member_id == entry.member_id
                            && month.contains(deposit.created_at)
                    })
                    .map(|deposit| deposit.amount)
                    .sum();

                let fine = fines
                    .iter()
                    .find(|fine| fine.member_id == entry.member_id && fine.month == month);

                let (fine_amount, fine_status) = match fine {
                    Some(fine) => (fine.amount, fine.status.into()),
                    None => (Amount::ZERO, FineMark::None),
                };

                LedgerRow {
                    member_id: entry.member_id,
                    name: entry.name.clone(),
                    avatar: entry.avatar.clone(),
                    paid,
                    fine_amount,
                    fine_status,
                }
            })
            .collect();

        // sort_by is stable, so equal amounts keep roster order
        rows.sort_by(|a, b| b.paid.cmp(&a.paid));

        rows
    }

    #[cfg(test)]
    mod tests {
        use chrono::{TimeZone, Utc};
        use samiti_core::{Amount, MemberId, MonthKey};

        use crate::backoffice::fines::domain::fine_status::FineStatus;

        use super::{aggregate, DepositRecord, FineMark, FineRecord, RosterEntry};

        fn member(id: &str, name: &str) -> RosterEntry {
            RosterEntry {
                member_id: id.parse().unwrap(),
                name: Some(name.to_owned()),
                avatar: None,
            }
        }

        fn deposit(member_id: &str, amount: &str, approved: bool, date: (i32, u32, u32)) -> DepositRecord {
            DepositRecord {
                member_id: member_id.parse().unwrap(),
                amount: amount.parse().unwrap(),
                approved,
                created_at: Utc.with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0).unwrap(),
            }
        }

        fn fine(member_id: &str, amount: &str, month: &str, status: FineStatus) -> FineRecord {
            FineRecord {
                member_id: member_id.parse().unwrap(),
                amount: amount.parse().unwrap(),
                month: month.parse().unwrap(),
                status,
            }
        }

        fn march() -> MonthKey {
            "2024-03".parse().unwrap()
        }

        #[test]
        fn empty_inputs_yield_empty_report() {
            assert!(aggregate(march(), &[], &[], &[]).is_empty());
        }

        #[test]
        fn members_with_no_activity_get_zero_rows() {
            let roster = [member("aaa1", "Asha"), member("bbb2", "Bibek")];

            let rows = aggregate(march(), &roster, &[], &[]);

            assert_eq!(rows.len(), 2);
            for row in &rows {
                assert_eq!(row.paid, Amount::ZERO);
                assert_eq!(row.fine_amount, Amount::ZERO);
                assert_eq!(row.fine_status, FineMark::None);
            }
        }

        #[test]
        fn only_approved_deposits_inside_the_month_count() {
            let roster = [member("aaa1", "Asha"), member("bbb2", "Bibek")];
            let deposits = [
                deposit("aaa1", "500", true, (2024, 3, 10)),
                deposit("bbb2", "300", true, (2024, 2, 15)),
                deposit("aaa1", "900", false, (2024, 3, 12)),
            ];

            let rows = aggregate(march(), &roster, &deposits, &[]);

            assert_eq!(rows[0].name.as_deref(), Some("Asha"));
            assert_eq!(rows[0].paid, "500".parse().unwrap());
            assert_eq!(rows[1].name.as_deref(), Some("Bibek"));
            assert_eq!(rows[1].paid, Amount::ZERO);
        }

        #[test]
        fn paid_totals_conserve_the_approved_deposits() {
            let roster = [member("aaa1", "Asha"), member("bbb2", "Bibek"), member("ccc3", "Chen")];
            let deposits = [
                deposit("aaa1", "100.25", true, (2024, 3, 1)),
                deposit("aaa1", "50.75", true, (2024, 3, 20)),
                deposit("bbb2", "200", true, (2024, 3, 31)),
                deposit("ccc3", "999", false, (2024, 3, 5)),
                deposit("bbb2", "70", true, (2024, 4, 1)),
            ];

            let rows = aggregate(march(), &roster, &deposits, &[]);

            let expected: Amount = deposits
                .iter()
                .filter(|d| d.approved && march().contains(d.created_at))
                .map(|d| d.amount)
                .sum();
            let total: Amount = rows.iter().map(|row| row.paid).sum();

            assert_eq!(total, expected);
        }

        #[test]
        fn sorts_by_paid_descending_and_keeps_roster_order_on_ties() {
            let roster = [
                member("aaa1", "Asha"),
                member("bbb2", "Bibek"),
                member("ccc3", "Chen"),
                member("ddd4", "Devi"),
            ];
            let deposits = [
                deposit("bbb2", "200", true, (2024, 3, 2)),
                deposit("ccc3", "200", true, (2024, 3, 3)),
                deposit("ddd4", "800", true, (2024, 3, 4)),
            ];

            let rows = aggregate(march(), &roster, &deposits, &[]);

            let names: Vec<_> = rows.iter().map(|row| row.name.as_deref().unwrap()).collect();
            assert_eq!(names, ["Devi", "Bibek", "Chen", "Asha"]);
        }

        #[test]
        fn fines_attach_only_for_the_matching_month() {
            let roster = [member("aaa1", "Asha"), member("bbb2", "Bibek")];
            let fines = [
                fine("aaa1", "50", "2024-03", FineStatus::Unpaid),
                fine("bbb2", "75", "2024-02", FineStatus::Paid),
            ];

            let rows = aggregate(march(), &roster, &[], &fines);

            assert_eq!(rows[0].fine_amount, "50".parse().unwrap());
            assert_eq!(rows[0].fine_status, FineMark::Unpaid);
            assert_eq!(rows[1].fine_amount, Amount::ZERO);
            assert_eq!(rows[1].fine_status, FineMark::None);
        }

        #[test]
        fn paid_fines_keep_their_amount_in_the_report() {
            let roster = [member("aaa1", "Asha")];
            let fines = [fine("aaa1", "25", "2024-03", FineStatus::Paid)];

            let rows = aggregate(march(), &roster, &[], &fines);

            assert_eq!(rows[0].fine_amount, "25".parse().unwrap());
            assert_eq!(rows[0].fine_status, FineMark::Paid);
        }

        #[test]
        fn same_inputs_give_the_same_report() {
            let roster = [member("aaa1", "Asha"), member("bbb2", "Bibek")];
            let deposits = [
                deposit("aaa1", "500", true, (2024, 3, 10)),
                deposit("bbb2", "300", true, (2024, 2, 15)),
            ];
            let fines = [fine("bbb2", "10", "2024-03", FineStatus::Unpaid)];

            let first = aggregate(march(), &roster, &deposits, &fines);
            let second = aggregate(march(), &roster, &deposits, &fines);

            let ids = |rows: &[super::LedgerRow]| -> Vec<(MemberId, Amount)> {
                rows.iter().map(|row| (row.member_id, row.paid)).collect()
            };

            assert_eq!(ids(&first), ids(&second));
        }
    }
}

pub mod repository {
    use samiti_core::MonthKey;

    use crate::shared::infrastructure::errors::InfrastructureError;

    use super::ledger::{DepositRecord, FineRecord, RosterEntry};

    /// A stored row whose amount could not be read. The report carries on
    /// counting it as zero and surfaces the reference instead.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct MissingAmount {
        pub table: &'static str,
        pub id: String,
    }

    /// Raw month inputs. The roster comes back name-ascending; that order
    /// is the ledger's tie-break.
    #[derive(Debug, Default)]
    pub struct ReportRows {
        pub roster: Vec<RosterEntry>,
        pub deposits: Vec<DepositRecord>,
        pub fines: Vec<FineRecord>,
        pub warnings: Vec<MissingAmount>,
    }

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn month_rows(&self, month: MonthKey) -> Result<ReportRows, InfrastructureError>;
    }
}
