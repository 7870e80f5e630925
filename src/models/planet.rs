//! Planet rows and their create / partial-update inputs. `population` is the only numeric column.

use super::nullable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub planet_id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    #[serde(default)]
    pub population: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlanetChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub terrain: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub population: Option<Option<i64>>,
}

impl PlanetChanges {
    pub fn apply(self, p: &mut Planet) {
        if let Some(name) = self.name {
            p.name = name;
        }
        if let Some(climate) = self.climate {
            p.climate = climate;
        }
        if let Some(terrain) = self.terrain {
            p.terrain = terrain;
        }
        if let Some(population) = self.population {
            p.population = population;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn population_only_update() {
        let mut p = Planet {
            planet_id: 7,
            name: "Hoth".into(),
            climate: Some("frozen".into()),
            terrain: Some("tundra".into()),
            population: None,
        };
        let changes: PlanetChanges = serde_json::from_value(json!({"population": 100})).unwrap();
        changes.apply(&mut p);
        assert_eq!(p.name, "Hoth");
        assert_eq!(p.climate.as_deref(), Some("frozen"));
        assert_eq!(p.terrain.as_deref(), Some("tundra"));
        assert_eq!(p.population, Some(100));
    }

    #[test]
    fn population_must_be_integer() {
        let r: Result<NewPlanet, _> =
            serde_json::from_value(json!({"name": "Naboo", "climate": "temperate", "terrain": "hills", "population": "lots"}));
        assert!(r.is_err());
    }
}
