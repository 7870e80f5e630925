//! Row types for the four tables and the request bodies that create or change them.
//! Field names are column names, which are also the JSON keys clients see.

mod character;
mod favorite;
mod planet;
mod user;

pub use character::{Character, CharacterChanges, NewCharacter};
pub use favorite::{Favorite, FavoriteKind, FavoriteTarget, NewFavorite, UnknownFavoriteKind};
pub use planet::{NewPlanet, Planet, PlanetChanges};
pub use user::{hash_password, NewUser, Timestamp, User};

use serde::{Deserialize, Deserializer};

/// For partial updates: an absent key stays `None`, an explicit `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}
