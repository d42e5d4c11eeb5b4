use serde::Serialize;

use crate::characters::repo::Character;
use crate::planets::repo::Planet;
use crate::starships::repo::Starship;
use crate::users::repo::User;

#[derive(Debug, Serialize)]
pub struct FavouriteCharactersResponse {
    pub msg: String,
    pub favourite_characters: Vec<Character>,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct FavouritePlanetsResponse {
    pub msg: String,
    pub favourite_planets: Vec<Planet>,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct FavouriteStarshipsResponse {
    pub msg: String,
    pub favourite_starships: Vec<Starship>,
    pub user: User,
}
