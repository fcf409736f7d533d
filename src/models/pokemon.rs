use serde::{Deserialize, Serialize};

/// Name/URL pair the PokeAPI uses for every cross-reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprites {
    pub front_default: String,
    pub front_shiny: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatValue {
    pub base_stat: i32,
    pub effort: i32,
    pub stat: NamedResource,
}

/// The subset of a PokeAPI pokemon payload the UI renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<PokemonTypeSlot>,
    pub weight: u32,
    pub height: u32,
    pub base_experience: u32,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatValue>,
}

/// One trainer's catch record for a pokemon in a given game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexEntry {
    pub id: String,
    pub trainer_id: String,
    pub game_id: String,
    pub pokemon_id: String,
    pub caught: bool,
    pub shiny: bool,
    pub living_dex: bool,
    pub shiny_living_dex: bool,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_data_parses_pokeapi_shape() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "sprites": {"front_default": "https://img/25.png", "front_shiny": "https://img/25s.png"},
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "abilities": [{"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1}],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}}],
            "cries": {"latest": "ignored"}
        }"#;
        let pokemon: PokemonData = serde_json::from_str(json).expect("pokeapi payload");
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert_eq!(pokemon.stats[0].base_stat, 35);
    }
}
