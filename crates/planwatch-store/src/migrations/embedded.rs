//! Embedded SQL migrations, compiled in with include_str!

/// Migration metadata
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All embedded migrations in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_messages",
            sql: include_str!("../../migrations/001_messages.sql"),
        },
        Migration {
            id: "002_pending_index",
            sql: include_str!("../../migrations/002_pending_index.sql"),
        },
    ]
}
