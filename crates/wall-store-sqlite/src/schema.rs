//! SQL schema for the wall SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per wall. The roster and message list live in `document`
-- and are always rewritten as a whole.
CREATE TABLE IF NOT EXISTS walls (
    wall_id     TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    document    TEXT NOT NULL,   -- JSON: {\"participants\": [...], \"messages\": [...]}
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned
    updated_at  TEXT NOT NULL    -- ISO 8601 UTC; bumped on every save
);

CREATE INDEX IF NOT EXISTS walls_updated_idx ON walls(updated_at);

PRAGMA user_version = 1;
";
