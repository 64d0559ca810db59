//! Database schema definitions (relational backend)

/// SQL to create the words table
pub const CREATE_WORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    word TEXT PRIMARY KEY,
    phonetic TEXT,
    definition TEXT,
    translation TEXT,
    pos TEXT,
    collins INTEGER,
    oxford INTEGER,
    tag TEXT,
    bnc INTEGER,
    frq INTEGER,
    exchange TEXT,
    detail TEXT,
    audio TEXT
)
"#;

/// SQL to create the lemmas table
pub const CREATE_LEMMAS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS lemmas (
    lemma TEXT PRIMARY KEY,
    forms TEXT
)
"#;

/// SQL to create the wordroots table
pub const CREATE_WORDROOTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wordroots (
    root TEXT PRIMARY KEY,
    meaning TEXT,
    class TEXT,
    examples TEXT,
    origin TEXT
)
"#;

/// SQL to create the resemble table
pub const CREATE_RESEMBLE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS resemble (
    group_name TEXT PRIMARY KEY,
    description TEXT
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_WORDS_TABLE,
        CREATE_LEMMAS_TABLE,
        CREATE_WORDROOTS_TABLE,
        CREATE_RESEMBLE_TABLE,
    ]
}
