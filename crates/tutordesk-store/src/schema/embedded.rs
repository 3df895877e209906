//! Schema SQL embedded at compile time

pub const DIRECTORY_SCHEMA_ID: &str = "001_directory";

pub struct SchemaScript {
    pub id: &'static str,
    pub sql: &'static str,
}

pub fn directory_schema() -> SchemaScript {
    SchemaScript {
        id: DIRECTORY_SCHEMA_ID,
        sql: include_str!("../../schema/001_directory.sql"),
    }
}
