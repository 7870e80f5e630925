//! Favorites: a user's bookmark on exactly one planet or one character.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    Character,
}

impl FavoriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planet",
            FavoriteKind::Character => "character",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unknown favorite type: {0}")]
pub struct UnknownFavoriteKind(pub String);

impl FromStr for FavoriteKind {
    type Err = UnknownFavoriteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planet" => Ok(FavoriteKind::Planet),
            "character" => Ok(FavoriteKind::Character),
            other => Err(UnknownFavoriteKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for FavoriteKind {
    type Error = UnknownFavoriteKind;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub favorite_id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub character_id: Option<i64>,
    #[sqlx(try_from = "String")]
    pub favorite_type: FavoriteKind,
}

/// What a favorite points at. Exactly one target, so the type tag always agrees with the ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Character(i64),
}

impl FavoriteTarget {
    pub fn kind(self) -> FavoriteKind {
        match self {
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
            FavoriteTarget::Character(_) => FavoriteKind::Character,
        }
    }

    pub fn planet_id(self) -> Option<i64> {
        match self {
            FavoriteTarget::Planet(id) => Some(id),
            FavoriteTarget::Character(_) => None,
        }
    }

    pub fn character_id(self) -> Option<i64> {
        match self {
            FavoriteTarget::Character(id) => Some(id),
            FavoriteTarget::Planet(_) => None,
        }
    }
}

/// POST body for a user's favorite: one of `planet_id` or `character_id`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewFavorite {
    #[serde(default)]
    pub planet_id: Option<i64>,
    #[serde(default)]
    pub character_id: Option<i64>,
}

impl NewFavorite {
    pub fn target(&self) -> Result<FavoriteTarget, AppError> {
        match (self.planet_id, self.character_id) {
            (Some(p), None) => Ok(FavoriteTarget::Planet(p)),
            (None, Some(c)) => Ok(FavoriteTarget::Character(c)),
            (Some(_), Some(_)) => Err(AppError::Validation(
                "a favorite references either planet_id or character_id, not both".into(),
            )),
            (None, None) => Err(AppError::Validation("planet_id or character_id is required".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_target() {
        let planet = NewFavorite { planet_id: Some(3), character_id: None };
        assert_eq!(planet.target().unwrap(), FavoriteTarget::Planet(3));
        assert_eq!(planet.target().unwrap().kind(), FavoriteKind::Planet);

        let both = NewFavorite { planet_id: Some(3), character_id: Some(4) };
        assert!(matches!(both.target(), Err(AppError::Validation(_))));
        assert!(matches!(NewFavorite::default().target(), Err(AppError::Validation(_))));
    }

    #[test]
    fn kind_parses_stored_tags() {
        assert_eq!("character".parse::<FavoriteKind>().unwrap(), FavoriteKind::Character);
        assert!(FavoriteKind::try_from("starship".to_string()).is_err());
    }
}
