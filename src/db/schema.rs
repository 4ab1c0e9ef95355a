//! SQL DDL for initializing the name store.

/// MySQL schema with:
/// - `id` INT AUTO_INCREMENT PRIMARY KEY, assigned by the server on insert
/// - `name` VARCHAR(255) NOT NULL, free-form text; empty strings allowed
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS names (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL
);
"#;
