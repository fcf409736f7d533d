use serde::{Deserialize, Serialize};

use crate::models::PokemonGame;

/// Denormalized snapshot of the authenticated user.
///
/// Replaced wholesale whenever the backend returns a fresh profile; the
/// session store owns the only mutable copy. Backends omit fields they do
/// not populate, so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub avatar: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub favorite_pokemon: String,
    pub favorite_game_id: String,
    pub favorite_game: Option<PokemonGame>,
    pub role: String,
    pub dob: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Fields a user may change through `PUT /profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub avatar: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub favorite_pokemon: String,
    pub favorite_game_id: String,
    pub dob: String,
}

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_partial_json() {
        let user: User =
            serde_json::from_str(r#"{"id":"1","username":"ash"}"#).expect("partial user");
        assert_eq!(user.id, "1");
        assert_eq!(user.username, "ash");
        assert_eq!(user.email, "");
        assert_eq!(user.favorite_game, None);
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = User {
            id: "1".to_string(),
            username: "ash".to_string(),
            email: "ash@pallet.town".to_string(),
            favorite_pokemon: "pikachu".to_string(),
            ..User::default()
        };
        let json = serde_json::to_string(&user).expect("serialize");
        let back: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, user);
    }
}
