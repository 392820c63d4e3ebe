//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::cli::types::ids::PlayerId;
use crate::error::{PlayerError, Result};
use rusqlite::{params, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, name, img, created_at, updated_at FROM football_player";

impl PlayerDatabase {
    /// Insert a new player and return it with its assigned ID
    pub fn insert_player(&mut self, player: &NewFootballPlayer) -> Result<FootballPlayer> {
        let now = unix_now();

        self.conn.execute(
            "INSERT INTO football_player (name, img, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
            params![player.name, player.img, now, now],
        )?;

        let id = PlayerId::new(self.conn.last_insert_rowid());
        debug!(%id, name = %player.name, "Inserted player");

        Ok(FootballPlayer {
            id,
            name: player.name.clone(),
            img: player.img.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a player by ID
    pub fn get_player(&self, id: PlayerId) -> Result<Option<FootballPlayer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?", SELECT_COLUMNS))?;

        let player = stmt.query_row(params![id], Self::row_to_player).optional()?;
        Ok(player)
    }

    /// Get a player by ID, failing with `PlayerNotFound` if absent
    pub fn require_player(&self, id: PlayerId) -> Result<FootballPlayer> {
        self.get_player(id)?
            .ok_or(PlayerError::PlayerNotFound { id: id.as_i64() })
    }

    /// List players matching the query
    pub fn list_players(&self, query: &PlayerQuery) -> Result<Vec<FootballPlayer>> {
        let mut sql = SELECT_COLUMNS.to_string();
        let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(fragment) = query.name_contains.as_deref().filter(|s| !s.is_empty()) {
            sql.push_str(" WHERE name LIKE ? ESCAPE '\\'");
            values.push(Box::new(format!("%{}%", escape_like(fragment))));
        }

        sql.push_str(" ORDER BY ");
        sql.push_str(query.order.as_sql());

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            values.push(Box::new(limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(values.iter().map(|v| v.as_ref())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Apply a partial update and return the stored result
    pub fn update_player(&mut self, id: PlayerId, update: &PlayerUpdate) -> Result<FootballPlayer> {
        if update.is_empty() {
            return self.require_player(id);
        }

        let rows_affected = self.conn.execute(
            "UPDATE football_player
             SET name = COALESCE(?, name),
                 img = COALESCE(?, img),
                 updated_at = ?
             WHERE id = ?",
            params![update.name, update.img, unix_now(), id],
        )?;

        if rows_affected == 0 {
            return Err(PlayerError::PlayerNotFound { id: id.as_i64() });
        }

        debug!(%id, "Updated player");
        self.require_player(id)
    }

    /// Delete a player, returning the removed record
    pub fn delete_player(&mut self, id: PlayerId) -> Result<FootballPlayer> {
        let player = self.require_player(id)?;
        self.conn
            .execute("DELETE FROM football_player WHERE id = ?", params![id])?;

        debug!(%id, "Deleted player");
        Ok(player)
    }

    /// Number of stored players
    pub fn count_players(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM football_player", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Clear all data from the database
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM football_player", [])?;
        Ok(())
    }

    /// Helper to convert database row to FootballPlayer
    pub(crate) fn row_to_player(row: &Row) -> rusqlite::Result<FootballPlayer> {
        Ok(FootballPlayer {
            id: row.get(0)?,
            name: row.get(1)?,
            img: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }
}

fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
