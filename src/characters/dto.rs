use serde::{Deserialize, Serialize};

use crate::characters::repo::Character;

#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub affiliations: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CharacterListResponse {
    pub msg: String,
    pub characters: Vec<Character>,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    pub msg: String,
    pub character: Character,
}
