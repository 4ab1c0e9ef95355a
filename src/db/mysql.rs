use crate::db::NameStore;
use crate::db::models::NameRecord;
use crate::db::schema::MYSQL_INIT;
use crate::error::RosterError;
use sqlx::{Connection, MySqlConnection};

/// MySQL-backed name store.
///
/// Holds the single connection the program opens at startup and reuses for
/// every operation. There is no pool: one caller, one connection.
pub struct MysqlNameStore {
    conn: MySqlConnection,
}

impl MysqlNameStore {
    /// Open the connection for the given DSN.
    pub async fn connect(database_url: &str) -> Result<Self, RosterError> {
        let conn = MySqlConnection::connect(database_url).await?;
        Ok(Self { conn })
    }

    /// Close the connection cleanly. Dropping the store also releases it,
    /// so error paths that skip this still give the handle back.
    pub async fn close(self) -> Result<(), RosterError> {
        self.conn.close().await?;
        Ok(())
    }

    pub fn connection(&mut self) -> &mut MySqlConnection {
        &mut self.conn
    }
}

impl NameStore for MysqlNameStore {
    /// Initialize the schema by executing the bundled DDL.
    async fn ensure_table(&mut self) -> Result<(), RosterError> {
        // execute one statement at a time (sqlx::query doesn't take multi-statement strings)
        for stmt in MYSQL_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&mut self.conn).await?;
        }
        Ok(())
    }

    async fn insert(&mut self, name: &str) -> Result<u64, RosterError> {
        let result = sqlx::query("INSERT INTO names (name) VALUES (?)")
            .bind(name)
            .execute(&mut self.conn)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn list_all(&mut self) -> Result<Vec<String>, RosterError> {
        let rows: Vec<NameRecord> = sqlx::query_as("SELECT id, name FROM names ORDER BY id")
            .fetch_all(&mut self.conn)
            .await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }
}
