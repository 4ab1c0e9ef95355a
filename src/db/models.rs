use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `names` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct NameRecord {
    pub id: i32,
    pub name: String,
}
