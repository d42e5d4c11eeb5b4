use serde::{Deserialize, Serialize};

use crate::starships::repo::Starship;

#[derive(Debug, Deserialize)]
pub struct CreateStarshipRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub dimensions: Option<String>,
    pub velocity: Option<String>,
    pub hyperspace: Option<bool>,
    pub affiliations: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StarshipListResponse {
    pub msg: String,
    pub starships: Vec<Starship>,
}

#[derive(Debug, Serialize)]
pub struct StarshipResponse {
    pub msg: String,
    pub starship: Starship,
}
