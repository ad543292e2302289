#[cfg(all(feature = "db_test", not(feature = "embedded")))]
pub type Engine = surrealdb::engine::local::Db;
#[cfg(feature = "embedded")]
pub type Engine = surrealdb::engine::local::Db;
#[cfg(all(feature = "remote", not(any(feature = "embedded", feature = "db_test"))))]
pub type Engine = surrealdb::engine::remote::ws::Client;

pub type Connection = surrealdb::Surreal<Engine>;

pub type Error = surrealdb::Error;

#[cfg(feature = "embedded")]
const DB_DIR: &str = "samiti.db";

const URL_ENV: &str = "SAMITI_DB_URL";
const DEFAULT_URL: &str = "127.0.0.1:8000";

async fn init(connection: &Connection) -> surrealdb::Result<()> {
    connection
        .query("DEFINE TABLE member")
        .query("DEFINE FIELD name ON member TYPE option<string>")
        .query("DEFINE FIELD avatar ON member TYPE option<string>")
        .query("DEFINE FIELD role ON member TYPE string")
        .query("DEFINE FIELD status ON member TYPE string")
        .query("DEFINE FIELD created_at ON member VALUE time::now()")
        .await?
        .check()?;

    connection
        .query("DEFINE TABLE deposit")
        .query("DEFINE FIELD member_id ON deposit TYPE record<member>")
        .query("DEFINE FIELD amount ON deposit TYPE number")
        .query("DEFINE FIELD description ON deposit TYPE string")
        .query("DEFINE FIELD approved ON deposit TYPE bool")
        .query("DEFINE FIELD created_at ON deposit TYPE datetime")
        .await?
        .check()?;

    connection
        .query("DEFINE TABLE fine")
        .query("DEFINE FIELD member_id ON fine TYPE record<member>")
        .query("DEFINE FIELD amount ON fine TYPE number")
        .query("DEFINE FIELD description ON fine TYPE string")
        .query("DEFINE FIELD month ON fine TYPE number")
        .query("DEFINE FIELD year ON fine TYPE number")
        .query("DEFINE FIELD status ON fine TYPE string")
        .query("DEFINE FIELD created_at ON fine VALUE time::now()")
        .await?
        .check()?;

    connection
        .query("DEFINE TABLE expense")
        .query("DEFINE FIELD amount ON expense TYPE number")
        .query("DEFINE FIELD description ON expense TYPE string")
        .query("DEFINE FIELD created_at ON expense VALUE time::now()")
        .await?
        .check()?;

    connection
        .query("DEFINE TABLE setting")
        .query("DEFINE FIELD value ON setting TYPE string")
        .await?
        .check()?;

    Ok(())
}

#[cfg(feature = "embedded")]
async fn create_connection() -> surrealdb::Result<Connection> {
    let path = crate::shared::infrastructure::filesystem::create_local_path().join(DB_DIR);
    let db = surrealdb::Surreal::new::<surrealdb::engine::local::File>(format!(
        "file://{}",
        path.display()
    ))
    .await?;

    Ok(db)
}

#[cfg(all(feature = "db_test", not(feature = "embedded")))]
async fn create_connection() -> surrealdb::Result<Connection> {
    let db = surrealdb::Surreal::new::<surrealdb::engine::local::Mem>(()).await?;
    Ok(db)
}

#[cfg(all(feature = "remote", not(any(feature = "embedded", feature = "db_test"))))]
async fn create_connection() -> surrealdb::Result<Connection> {
    let url = std::env::var(URL_ENV).unwrap_or_else(|_| DEFAULT_URL.to_owned());
    let db: Connection = surrealdb::Surreal::new::<surrealdb::engine::remote::ws::Ws>(url).await?;
    Ok(db)
}

pub async fn connect() -> surrealdb::Result<Connection> {
    let db = create_connection().await?;
    db.use_ns("samiti").use_db("samiti").await?;

    init(&db).await?;

    Ok(db)
}

pub(crate) use entity::{Entity, EntityKey, SqlId};

mod entity {
    use serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer};

    /// Record id of table `TABLE`, stored as a plain string id.
    pub trait SqlId: Copy + DeserializeOwned + std::fmt::Display {
        const TABLE: &'static str;
    }

    pub struct EntityKey<K>(pub K);
    pub struct Entity<K, T>(pub K, pub T);

    impl<K, T> From<(K, T)> for Entity<K, T> {
        fn from((key, value): (K, T)) -> Self {
            Entity(key, value)
        }
    }

    impl<K, T> From<Entity<K, T>> for (K, T) {
        fn from(Entity(key, value): Entity<K, T>) -> Self {
            (key, value)
        }
    }

    impl<K, T> Entity<K, T> {
        pub fn into_key(self) -> K {
            self.0
        }
    }

    impl<'de, K: SqlId> Deserialize<'de> for EntityKey<K> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            // A record id comes back as a Thing; its `id` part is the
            // string form this crate writes.
            #[derive(serde::Deserialize)]
            struct SqlThing<I> {
                id: I,
            }

            #[derive(serde::Deserialize)]
            struct StringIdDe<K> {
                #[serde(rename = "String")]
                field: K,
            }

            let thing = SqlThing::<StringIdDe<K>>::deserialize(deserializer)?;
            Ok(EntityKey(thing.id.field))
        }
    }

    impl<K: SqlId> Serialize for EntityKey<K> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let thing = surrealdb::sql::Thing {
                tb: K::TABLE.to_owned(),
                id: surrealdb::sql::Id::String(self.0.to_string()),
            };

            thing.serialize(serializer)
        }
    }

    impl<'de, K: SqlId, T: DeserializeOwned> Deserialize<'de> for Entity<K, T> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            #[derive(serde::Deserialize)]
            #[serde(bound = "T: DeserializeOwned")]
            struct EntityDe<K: SqlId, T> {
                id: EntityKey<K>,
                #[serde(flatten)]
                value: T,
            }

            let EntityDe { id: key, value } = EntityDe::deserialize(deserializer)?;
            Ok(Entity(key.0, value))
        }
    }

    impl SqlId for samiti_core::MemberId {
        const TABLE: &'static str = "member";
    }

    impl SqlId for samiti_core::DepositId {
        const TABLE: &'static str = "deposit";
    }

    impl SqlId for samiti_core::FineId {
        const TABLE: &'static str = "fine";
    }

    impl SqlId for samiti_core::ExpenseId {
        const TABLE: &'static str = "expense";
    }
}
