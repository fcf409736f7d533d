//! Data models for PokéHub entities.
//!
//! Shapes mirror what the backend serves and the UI consumes:
//!
//! - `User`: the session snapshot, plus the profile-update payload
//! - Community content: `BlogPost`, forum types, `Guide`, `Shout`, `Snap`
//! - Access control: `Role`, `Permission`
//! - `PokemonGame`, pokedex entries, and the PokeAPI types
//!
//! Timestamps stay as the wire strings - this layer never does date math on
//! them, and the user snapshot must round-trip byte-stable through a cookie.

pub mod blog;
pub mod forum;
pub mod game;
pub mod guide;
pub mod pokemon;
pub mod role;
pub mod shout;
pub mod snap;
pub mod user;

pub use blog::{BlogPost, NewBlogPost};
pub use forum::{
    CommentPage, CommentPagination, ForumCategory, ForumComment, ForumTopic, ForumTopicSummary,
    NewForumCategory, NewForumTopic,
};
pub use game::{NewPokemonGame, PokemonGame};
pub use guide::{Guide, NewGuide};
pub use pokemon::{
    AbilitySlot, NamedResource, PokedexEntry, PokemonData, PokemonTypeSlot, Sprites, StatValue,
};
pub use role::{NewPermission, NewRole, Permission, Role};
pub use shout::{NewShout, Shout, ShoutComment, ShoutLike};
pub use snap::{NewSnap, Snap, SnapUpdate};
pub use user::{Registration, User, UserUpdate};
