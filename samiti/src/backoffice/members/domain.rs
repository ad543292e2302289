pub mod member {
    use crate::date::Datetime;

    use super::{member_name::MemberName, role::Role, status::Status};

    /// Roster entry. Members are created pending on first sign-in and are
    /// never hard-deleted.
    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct Member {
        pub name: Option<MemberName>,
        pub avatar: Option<String>,
        pub role: Role,
        pub status: Status,
        #[serde(default)]
        pub created_at: Option<Datetime>,
    }
}

pub mod member_name {
    use std::fmt::Display;

    #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    pub struct MemberName(String);

    impl MemberName {
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl Display for MemberName {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl From<String> for MemberName {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl std::str::FromStr for MemberName {
        type Err = std::convert::Infallible;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Self(s.to_owned()))
        }
    }
}

pub mod role {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Role {
        Admin,
        Member,
    }

    impl std::fmt::Display for Role {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Admin => write!(f, "admin"),
                Self::Member => write!(f, "member"),
            }
        }
    }
}

pub mod status {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Status {
        Pending,
        Active,
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Pending => write!(f, "pending"),
                Self::Active => write!(f, "active"),
            }
        }
    }
}

pub mod repository {
    use samiti_core::MemberId;

    use crate::shared::{
        domain::errors::UniqueSaveError,
        infrastructure::errors::{AppError, InfrastructureError},
    };

    use super::{member::Member, member_name::MemberName};

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn save(&self, id: MemberId, member: Member)
            -> Result<(), AppError<UniqueSaveError>>;

        async fn activate(&self, id: MemberId) -> Result<(), UpdateError>;

        async fn update_profile(
            &self,
            id: MemberId,
            name: Option<MemberName>,
            avatar: Option<String>,
        ) -> Result<(), UpdateError>;

        async fn get_one(&self, id: MemberId) -> Result<Option<Member>, InfrastructureError>;

        async fn get_all(&self) -> Result<Vec<(MemberId, Member)>, InfrastructureError>;
    }

    #[derive(thiserror::Error, Debug)]
    pub enum UpdateError {
        #[error("member id not found")]
        NotFound,
        #[error(transparent)]
        Unspecified(InfrastructureError),
    }
}
