use serde::{Deserialize, Serialize};

/// A mainline Pokemon game (Red, Emerald, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonGame {
    pub id: String,
    pub name: String,
    pub region: String,
    pub generation: i32,
    pub released_at: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPokemonGame {
    pub name: String,
    pub region: String,
    pub generation: i32,
    pub released_at: String,
    pub description: String,
}
