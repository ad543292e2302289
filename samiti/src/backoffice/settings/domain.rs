pub mod setting_key {
    /// Well-known society settings, stored as single string records.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SettingKey {
        Notice,
        Rules,
        MonthlyFee,
    }

    impl SettingKey {
        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Notice => "notice",
                Self::Rules => "rules",
                Self::MonthlyFee => "monthly_fee",
            }
        }
    }

    impl std::fmt::Display for SettingKey {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("unknown setting key")]
    pub struct UnknownKey;

    impl std::str::FromStr for SettingKey {
        type Err = UnknownKey;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "notice" => Ok(Self::Notice),
                "rules" => Ok(Self::Rules),
                "monthly_fee" => Ok(Self::MonthlyFee),
                _ => Err(UnknownKey),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::SettingKey;

        #[test]
        fn keys_round_trip_their_names() {
            for key in [SettingKey::Notice, SettingKey::Rules, SettingKey::MonthlyFee] {
                let parsed: SettingKey = key.as_str().parse().unwrap();
                assert_eq!(parsed, key);
            }

            assert!("fee".parse::<SettingKey>().is_err());
        }
    }
}

pub mod repository {
    use crate::shared::infrastructure::errors::InfrastructureError;

    use super::setting_key::SettingKey;

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn set(&self, key: SettingKey, value: String) -> Result<(), InfrastructureError>;

        async fn get(&self, key: SettingKey) -> Result<Option<String>, InfrastructureError>;
    }
}
