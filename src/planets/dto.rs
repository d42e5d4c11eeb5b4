use serde::{Deserialize, Serialize};

use crate::planets::repo::Planet;

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub extension: Option<String>,
    pub population: Option<String>,
    pub locations: Option<String>,
    pub climate: Option<String>,
    pub species: Option<String>,
    pub affiliations: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanetListResponse {
    pub msg: String,
    pub planets: Vec<Planet>,
}

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub msg: String,
    pub planet: Planet,
}
