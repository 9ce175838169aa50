//! Stored shape of a planet

use holocron_domain::Planet;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A planet as stored in the `planets` collection
///
/// Zero-valued fields are left out of the stored document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub climate: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub terrain: String,

    #[serde(
        rename = "totalFilms",
        default,
        skip_serializing_if = "is_zero"
    )]
    pub total_films: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl From<&Planet> for PlanetDocument {
    fn from(planet: &Planet) -> Self {
        Self {
            // New documents get their id from the server
            id: ObjectId::parse_str(planet.id()).ok(),
            name: planet.name().to_string(),
            climate: planet.climate().to_string(),
            terrain: planet.terrain().to_string(),
            total_films: i64::from(planet.total_films()),
        }
    }
}

impl From<PlanetDocument> for Planet {
    fn from(doc: PlanetDocument) -> Self {
        Planet::from_parts(
            doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            doc.name,
            doc.climate,
            doc.terrain,
            u32::try_from(doc.total_films).unwrap_or(0),
        )
    }
}
