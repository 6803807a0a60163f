//! Contains types to represent the database pool.

use sea_orm::DbConn;

/// Represents the SQL database of the API.
pub struct Database {
    /// The SQL database connection pool.
    pub sql_conn: DbConn,
}

impl Database {
    /// Returns the database from the URL to the SQL database.
    pub async fn from_db_url(db_url: String) -> Result<Self, sea_orm::DbErr> {
        let sql_conn = sea_orm::Database::connect(db_url).await?;
        Ok(Self { sql_conn })
    }
}

// For some reasons, sea_orm::DbConn doesn't implement Clone
impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            sql_conn: match &self.sql_conn {
                #[cfg(feature = "mysql")]
                sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxMySqlPoolConnection(conn.clone())
                }
                #[cfg(feature = "postgres")]
                sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxPostgresPoolConnection(conn.clone())
                }
                #[cfg(feature = "sqlite")]
                sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(conn) => {
                    sea_orm::DatabaseConnection::SqlxSqlitePoolConnection(conn.clone())
                }
                sea_orm::DatabaseConnection::Disconnected => {
                    sea_orm::DatabaseConnection::Disconnected
                }
            },
        }
    }
}
