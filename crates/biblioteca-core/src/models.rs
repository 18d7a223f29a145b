//! Data models for Biblioteca
//!
//! Defines the book record and its two-valued read status.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single book in the collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Assigned by storage on creation, never changes afterwards
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub status: ReadStatus,
}

/// Whether a book has been read
///
/// Stored and displayed as `Leído` / `No leído`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReadStatus {
    #[serde(rename = "Leído")]
    Read,
    #[serde(rename = "No leído")]
    Unread,
}

impl ReadStatus {
    /// The text stored in the database and shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Read => "Leído",
            ReadStatus::Unread => "No leído",
        }
    }

    /// Map a yes/no answer (`s` / `n`, any case) to a status
    ///
    /// Returns None for anything else, including blank input.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "s" => Some(ReadStatus::Read),
            "n" => Some(ReadStatus::Unread),
            _ => None,
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string that is neither `Leído` nor `No leído`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid read status '{0}': expected 'Leído' or 'No leído'")]
pub struct InvalidStatus(pub String);

impl FromStr for ReadStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Leído" => Ok(ReadStatus::Read),
            "No leído" => Ok(ReadStatus::Unread),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

impl ToSql for ReadStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ReadStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: InvalidStatus| FromSqlError::Other(Box::new(e)))
    }
}
