/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` so statements can be assembled at
/// compile time via `const_format::concatcp!`.
///
/// This trait contains no I/O; [`crate::migrate`] runs the statements.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL (plus any sequences it needs).
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
