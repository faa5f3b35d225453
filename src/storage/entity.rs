//! Persistent table structure for products.

/// Name of the table holding products.
pub const TABLE_NAME: &str = "products";

/// Primary key column.
pub const PRIMARY_KEY_FIELD: &str = "id";

/// `(column, SQL type)` pairs in insert/select order. The primary key comes first.
pub const COLUMNS: &[(&str, &str)] = &[
    ("id", "INTEGER"),
    ("name", "TEXT"),
    ("description", "TEXT"),
    ("price", "DOUBLE PRECISION"),
    ("quantity", "INTEGER"),
];

pub const CREATE_NAME_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS ix_products_name ON products (name)";

/// Returns the `CREATE TABLE IF NOT EXISTS` statement for the products table.
pub fn create_table_sql() -> String {
    let columns = COLUMNS
        .iter()
        .map(|(name, sql_type)| {
            if *name == PRIMARY_KEY_FIELD {
                format!("{} {} PRIMARY KEY", name, sql_type)
            } else {
                format!("{} {} NOT NULL", name, sql_type)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS {} ({})", TABLE_NAME, columns)
}

/// Comma-separated column list, e.g. for `SELECT` and `RETURNING` clauses.
pub fn select_columns() -> String {
    COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
