type Id = crate::tiny_id::TinyId<4>;

mod id_utils {
    macro_rules! impl_id {
        ($name:ident) => {
            impl $name {
                pub fn new() -> Self {
                    Self(crate::ids::Id::new())
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl std::str::FromStr for $name {
                type Err = <crate::ids::Id as std::str::FromStr>::Err;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(Self(s.parse()?))
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    self.0.fmt(f)
                }
            }
        };
    }

    pub(crate) use impl_id;
}

use id_utils::impl_id;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct MemberId(Id);

impl_id!(MemberId);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct DepositId(Id);

impl_id!(DepositId);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct FineId(Id);

impl_id!(FineId);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ExpenseId(Id);

impl_id!(ExpenseId);
