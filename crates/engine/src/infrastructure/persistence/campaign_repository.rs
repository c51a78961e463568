//! SQLite campaign repository
//!
//! One `campaigns` table holding the campaign row and its owned character's
//! columns. Timestamps are RFC 3339 UTC text with fixed-width microseconds,
//! so the `ORDER BY updated_at` text comparison is also chronological.
//! Schema versioning is deliberately destructive: a `PRAGMA user_version`
//! mismatch drops and recreates the table.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use questkeeper_domain::common::parse_datetime;
use questkeeper_domain::{
    Alignment, Campaign, CampaignDraft, CampaignId, Character, CharacterClass, CharacterName,
    Experience, Gender, Level, PlayerName, Race, WizardProgress,
};

use crate::application::ports::{CampaignRepositoryPort, ClockPort, RepositoryError};

/// Bumping this wipes existing data on next startup.
const SCHEMA_VERSION: i64 = 1;

/// SQLite implementation of `CampaignRepositoryPort`.
pub struct SqliteCampaignRepository {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteCampaignRepository {
    /// Create a repository and ensure the table exists at the current
    /// schema version. A version mismatch drops the table and recreates it;
    /// upgrades lose all prior data by contract.
    pub async fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Result<Self, RepositoryError> {
        let stored_version: i64 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&pool)
            .await
            .map_err(storage)?;

        if stored_version != SCHEMA_VERSION {
            if stored_version != 0 {
                warn!(
                    stored_version,
                    schema_version = SCHEMA_VERSION,
                    "schema version changed, dropping campaigns table"
                );
            }
            sqlx::query("DROP TABLE IF EXISTS campaigns")
                .execute(&pool)
                .await
                .map_err(storage)?;
            sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .execute(&pool)
                .await
                .map_err(storage)?;
        }

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS campaigns (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                progress INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                player_name TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                race TEXT,
                class TEXT,
                level INTEGER NOT NULL DEFAULT 1,
                gender TEXT NOT NULL,
                alignment TEXT NOT NULL,
                height TEXT NOT NULL DEFAULT '',
                weight TEXT NOT NULL DEFAULT '',
                age TEXT NOT NULL DEFAULT '',
                exp INTEGER NOT NULL DEFAULT 0,
                background TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(storage)?;

        Ok(Self { pool, clock })
    }

    /// Expose the underlying pool for components sharing the same DB.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn now_text(&self) -> String {
        encode_timestamp(self.clock.now())
    }
}

#[async_trait]
impl CampaignRepositoryPort for SqliteCampaignRepository {
    async fn create(&self, draft: &CampaignDraft) -> Result<CampaignId, RepositoryError> {
        let now = self.now_text();
        let character = &draft.character;

        let result = sqlx::query(
            r#"
            INSERT INTO campaigns (
                progress, created_at, updated_at, player_name,
                first_name, last_name, race, class, level,
                gender, alignment, height, weight, age, exp, background
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(WizardProgress::AwaitingDetails.code())
        .bind(&now)
        .bind(&now)
        .bind(draft.player_name.as_str())
        .bind(character.first_name().as_str())
        .bind(character.last_name().as_str())
        .bind(character.race().map(|r| r.display_name()))
        .bind(character.class().map(|c| c.display_name()))
        .bind(i64::from(character.level().value()))
        .bind(character.gender().display_name())
        .bind(character.alignment().display_name())
        .bind(character.height())
        .bind(character.weight())
        .bind(character.age())
        .bind(i64::from(character.experience().value()))
        .bind(character.background())
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        let id = CampaignId::from_raw(result.last_insert_rowid());
        debug!(campaign_id = %id, "campaign row inserted");
        Ok(id)
    }

    async fn fetch_one(&self, id: CampaignId) -> Result<Campaign, RepositoryError> {
        let row = sqlx::query("SELECT * FROM campaigns WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        match row {
            Some(row) => decode_row(&row),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Campaign>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM campaigns ORDER BY updated_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(decode_row).collect()
    }

    async fn update(&self, campaign: &Campaign) -> Result<u64, RepositoryError> {
        let now = self.now_text();
        let character = campaign.character();

        let result = sqlx::query(
            r#"
            UPDATE campaigns SET
                progress = ?, updated_at = ?, player_name = ?,
                first_name = ?, last_name = ?, race = ?, class = ?, level = ?,
                gender = ?, alignment = ?, height = ?, weight = ?, age = ?,
                exp = ?, background = ?
            WHERE id = ?
            "#,
        )
        .bind(campaign.progress().code())
        .bind(&now)
        .bind(campaign.player_name().as_str())
        .bind(character.first_name().as_str())
        .bind(character.last_name().as_str())
        .bind(character.race().map(|r| r.display_name()))
        .bind(character.class().map(|c| c.display_name()))
        .bind(i64::from(character.level().value()))
        .bind(character.gender().display_name())
        .bind(character.alignment().display_name())
        .bind(character.height())
        .bind(character.weight())
        .bind(character.age())
        .bind(i64::from(character.experience().value()))
        .bind(character.background())
        .bind(campaign.id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: CampaignId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM campaigns WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        debug!(campaign_id = %id, "campaign row deleted");
        Ok(())
    }
}

fn storage(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

/// Fixed-width microseconds keep text ordering chronological.
fn encode_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(text: &str) -> Result<DateTime<Utc>, RepositoryError> {
    parse_datetime(text).map_err(|e| storage(format!("Invalid timestamp '{text}': {e}")))
}

fn decode_row(row: &SqliteRow) -> Result<Campaign, RepositoryError> {
    let id = CampaignId::from_raw(row.get::<i64, _>("id"));
    let progress = WizardProgress::from_code(row.get::<i64, _>("progress")).map_err(storage)?;
    let created_at = decode_timestamp(&row.get::<String, _>("created_at"))?;
    let updated_at = decode_timestamp(&row.get::<String, _>("updated_at"))?;

    let player_name = PlayerName::new(row.get::<String, _>("player_name")).map_err(storage)?;
    let first_name = CharacterName::new(row.get::<String, _>("first_name")).map_err(storage)?;
    let last_name = CharacterName::new(row.get::<String, _>("last_name")).map_err(storage)?;
    let gender = Gender::from_str(&row.get::<String, _>("gender")).map_err(storage)?;
    let alignment = Alignment::from_str(&row.get::<String, _>("alignment")).map_err(storage)?;

    let race = row
        .get::<Option<String>, _>("race")
        .map(|s| Race::from_str(&s))
        .transpose()
        .map_err(storage)?;
    let class = row
        .get::<Option<String>, _>("class")
        .map(|s| CharacterClass::from_str(&s))
        .transpose()
        .map_err(storage)?;

    let level = u8::try_from(row.get::<i64, _>("level"))
        .ok()
        .and_then(|v| Level::new(v).ok())
        .ok_or_else(|| storage(format!("Invalid stored level for campaign {id}")))?;
    let experience = u32::try_from(row.get::<i64, _>("exp"))
        .map(Experience::new)
        .map_err(|_| storage(format!("Invalid stored experience for campaign {id}")))?;

    let character = Character::new(first_name, last_name, gender, alignment)
        .with_race(race)
        .with_class(class)
        .with_level(level)
        .with_measurements(
            row.get::<String, _>("height"),
            row.get::<String, _>("weight"),
            row.get::<String, _>("age"),
        )
        .with_experience(experience)
        .with_background(row.get::<String, _>("background"));

    Ok(Campaign::from_record(
        id,
        player_name,
        progress,
        character,
        created_at,
        updated_at,
    ))
}

// ============================================================================
// Tests
// ============================================================================
