//! Data models for the storage layer

use crate::cli::types::{image_ref::ImageRef, ids::PlayerId, name::PlayerName};
use crate::error::PlayerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A football player as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootballPlayer {
    pub id: PlayerId,
    pub name: PlayerName,
    pub img: ImageRef,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A player that has not been saved yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewFootballPlayer {
    pub name: PlayerName,
    pub img: ImageRef,
}

/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerUpdate {
    pub name: Option<PlayerName>,
    pub img: Option<ImageRef>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.img.is_none()
    }
}

/// Sort order for player listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
}

impl PlayerOrder {
    pub(crate) fn as_sql(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Name => "name COLLATE NOCASE, id",
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerOrder::Id => write!(f, "id"),
            PlayerOrder::Name => write!(f, "name"),
        }
    }
}

impl FromStr for PlayerOrder {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(PlayerOrder::Id),
            "name" => Ok(PlayerOrder::Name),
            other => Err(PlayerError::Config {
                message: format!("unknown sort order '{}', expected 'id' or 'name'", other),
            }),
        }
    }
}

/// Filters for listing players
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    /// Substring match on the name (ASCII case-insensitive)
    pub name_contains: Option<String>,
    pub order: PlayerOrder,
    pub limit: Option<u32>,
}

impl ToSql for PlayerId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_i64()))
    }
}

impl FromSql for PlayerId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_i64().map(PlayerId::new)
    }
}

impl ToSql for PlayerName {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

// Rows are re-validated on the way out so a corrupt row fails loudly.
impl FromSql for PlayerName {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        PlayerName::new(s).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for ImageRef {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ImageRef {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        ImageRef::new(s).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
