//! Character rows and their create / partial-update inputs.

use super::nullable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Character {
    pub character_id: i64,
    pub name: String,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    pub gender: Option<String>,
}

/// POST body. `gender` may be omitted.
#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub species: String,
    pub homeworld: String,
    #[serde(default)]
    pub gender: Option<String>,
}

/// PUT body. Omitted keys keep the stored value; `null` clears an optional column.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharacterChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub species: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub homeworld: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: Option<Option<String>>,
}

impl CharacterChanges {
    pub fn apply(self, c: &mut Character) {
        if let Some(name) = self.name {
            c.name = name;
        }
        if let Some(species) = self.species {
            c.species = species;
        }
        if let Some(homeworld) = self.homeworld {
            c.homeworld = homeworld;
        }
        if let Some(gender) = self.gender {
            c.gender = gender;
        }
    }
}
