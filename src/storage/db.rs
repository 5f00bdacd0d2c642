use std::path::Path;

use anyhow::{Context, Result};
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Schema};

use crate::config::Config;
use crate::entities::{
    account, event, event_category, event_participant, member, photo, photo_album, photo_member, photo_tag,
    photo_tag_link,
};

const MEMORY_URL: &str = "sqlite::memory:";

/// Local storage manager for household data
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by the configuration
    pub async fn new(config: &Config) -> Result<Self> {
        match config.database_path()? {
            Some(path) => Self::open_file(&path).await,
            None => Self::in_memory().await,
        }
    }

    /// Open a throwaway in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::connect(MEMORY_URL).await
    }

    /// Open (creating if needed) a SQLite database file
    pub async fn open_file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }
        Self::connect(&format!("sqlite://{}?mode=rwc", path.display())).await
    }

    async fn connect(url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_string());
        // An in-memory database only lives as long as its single connection
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        log::debug!("Opened database {}", url);

        Ok(storage)
    }

    /// Create all tables from the entity definitions
    async fn init_schema(&self) -> Result<()> {
        self.conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        // Referenced tables first
        let tables: Vec<TableCreateStatement> = vec![
            schema.create_table_from_entity(account::Entity),
            schema.create_table_from_entity(member::Entity),
            schema.create_table_from_entity(photo_tag::Entity),
            schema.create_table_from_entity(photo_album::Entity),
            schema.create_table_from_entity(photo::Entity),
            schema.create_table_from_entity(photo_tag_link::Entity),
            schema.create_table_from_entity(photo_member::Entity),
            schema.create_table_from_entity(event_category::Entity),
            schema.create_table_from_entity(event::Entity),
            schema.create_table_from_entity(event_participant::Entity),
        ];

        for mut table in tables {
            table.if_not_exists();
            self.conn.execute(backend.build(&table)).await?;
        }

        let indexes = [
            schema.create_index_from_entity(member::Entity),
            schema.create_index_from_entity(photo::Entity),
            schema.create_index_from_entity(event::Entity),
        ];
        for mut index in indexes.into_iter().flatten() {
            index.if_not_exists();
            self.conn.execute(backend.build(&index)).await?;
        }

        Ok(())
    }

    /// Check if the database has any data
    pub async fn has_data(&self) -> Result<bool> {
        let members = member::Entity::find().count(&self.conn).await?;
        let photos = photo::Entity::find().count(&self.conn).await?;
        let events = event::Entity::find().count(&self.conn).await?;
        Ok(members + photos + events > 0)
    }

    /// Clear all data from the database
    pub async fn clear_all_data(&self) -> Result<()> {
        event_participant::Entity::delete_many().exec(&self.conn).await?;
        event::Entity::delete_many().exec(&self.conn).await?;
        event_category::Entity::delete_many().exec(&self.conn).await?;
        photo_member::Entity::delete_many().exec(&self.conn).await?;
        photo_tag_link::Entity::delete_many().exec(&self.conn).await?;
        photo::Entity::delete_many().exec(&self.conn).await?;
        photo_album::Entity::delete_many().exec(&self.conn).await?;
        photo_tag::Entity::delete_many().exec(&self.conn).await?;
        member::Entity::delete_many().exec(&self.conn).await?;
        account::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
