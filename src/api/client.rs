//! HTTP client for the PokéHub REST backend and the PokeAPI.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::{SessionStore, TOKEN_COOKIE};
use crate::config::Config;
use crate::cookies::CookieJar;
use crate::models::{
    BlogPost, CommentPage, ForumCategory, ForumComment, ForumTopic, ForumTopicSummary, Guide,
    NamedResource, NewBlogPost, NewForumCategory, NewForumTopic, NewGuide, NewPermission,
    NewPokemonGame, NewRole, NewShout, NewSnap, Permission, PokedexEntry, PokemonData,
    PokemonGame, Registration, Role, Shout, Snap, SnapUpdate, User, UserUpdate,
};
use crate::store::Pagination;

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum concurrent PokeAPI requests when hydrating a listing page.
/// Bounded so a 20-entry page does not open 20 sockets at once.
const MAX_CONCURRENT_POKEAPI_REQUESTS: usize = 10;

/// Build the outgoing header set from the current cookie state.
///
/// The token is read fresh on every call, so a login or logout is picked up
/// by the next request. An absent token cookie produces `Bearer ` with an
/// empty credential - intentional passthrough, the server rejects it. A
/// token that cannot be a header value degrades the same way.
pub fn auth_headers(jar: &CookieJar) -> header::HeaderMap {
    let token = jar.get(TOKEN_COOKIE).unwrap_or_default();
    let bearer = format!("Bearer {token}");
    let authorization = header::HeaderValue::from_str(&bearer).unwrap_or_else(|_| {
        warn!("token cookie is not header-safe, sending empty credential");
        header::HeaderValue::from_static("Bearer ")
    });

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, authorization);
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers
}

/// API client for PokéHub.
/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling, and the jar and session are shared handles.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
    jar: CookieJar,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client with a fresh cookie jar and session store.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let jar = CookieJar::new();
        Self::with_jar(config, jar)
    }

    /// Create a client over an existing jar, e.g. one shared with other
    /// clients of the same logical tab. The session store is built over the
    /// same jar so token reads and user persistence stay consistent.
    pub fn with_jar(config: Config, jar: CookieJar) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::new(format!("Failed to build HTTP client: {e}")))?;

        let session = SessionStore::new(jar.clone());
        Ok(Self {
            http,
            config,
            jar,
            session,
        })
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.jar
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url(), path)
    }

    fn pokeapi_url(&self, path: &str) -> String {
        format!("{}{}", self.config.pokeapi_url, path)
    }

    fn headers(&self) -> header::HeaderMap {
        auth_headers(&self.jar)
    }

    /// Send a request and parse the JSON body, collapsing every failure
    /// into an [`ApiError`] per the error model: the transport error's own
    /// message when it has one, `fallback` for everything else.
    async fn request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "request transport failure");
            ApiError::from_transport(e, fallback)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "request rejected");
            return Err(ApiError::new(fallback));
        }

        response.json().await.map_err(|e| {
            warn!(error = %e, "failed to decode response body");
            ApiError::new(fallback)
        })
    }

    /// Like [`request`](Self::request) for endpoints with no useful body.
    async fn request_unit(&self, request: RequestBuilder, fallback: &str) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, fallback))?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "request rejected");
            return Err(ApiError::new(fallback));
        }
        Ok(())
    }

    // ===== Auth =====

    /// Log in with email + password. On success the token cookie is set
    /// and, when the response carries a user snapshot, the session slot is
    /// filled.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("/auth/login");
        let body = LoginRequest { email, password };
        let response: AuthResponse = self
            .request(
                self.http.post(&url).headers(self.headers()).json(&body),
                "Invalid credentials",
            )
            .await?;
        self.store_credentials(&response);
        Ok(response)
    }

    /// Log in with username + password against the same endpoint.
    pub async fn login_with_username(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("/auth/login");
        let body = UsernameLoginRequest { username, password };
        let response: AuthResponse = self
            .request(
                self.http.post(&url).headers(self.headers()).json(&body),
                "Invalid credentials",
            )
            .await?;
        self.store_credentials(&response);
        Ok(response)
    }

    /// Create an account. The response mirrors login.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("/auth/register");
        let response: AuthResponse = self
            .request(
                self.http
                    .post(&url)
                    .headers(self.headers())
                    .json(registration),
                "Registration failed",
            )
            .await?;
        self.store_credentials(&response);
        Ok(response)
    }

    /// Drop the token and user cookies and reset the session slot.
    pub fn logout(&self) {
        self.session.clear();
    }

    fn store_credentials(&self, response: &AuthResponse) {
        self.jar.set(TOKEN_COOKIE, &response.token);
        if let Some(user) = &response.user {
            self.session.set_user(user.clone());
        }
    }

    // ===== Profile =====

    /// Fetch the signed-in user's profile and refresh the session slot.
    pub async fn fetch_profile(&self) -> Result<ProfileResponse, ApiError> {
        let url = self.api_url("/profile");
        let response: ProfileResponse = self
            .request(
                self.http.get(&url).headers(self.headers()),
                "Error fetching profile",
            )
            .await?;
        self.session.set_user(response.user.clone());
        Ok(response)
    }

    /// Update profile fields. The returned snapshot replaces the session
    /// slot in full - whichever of two racing updates resolves last wins.
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<ProfileResponse, ApiError> {
        let url = self.api_url("/profile");
        let response: ProfileResponse = self
            .request(
                self.http.put(&url).headers(self.headers()).json(update),
                "Profile update failed",
            )
            .await?;
        self.session.set_user(response.user.clone());
        Ok(response)
    }

    // ===== Blog =====

    pub async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let url = self.api_url("/blog/");
        self.request(self.http.get(&url), "Error fetching blog posts")
            .await
    }

    pub async fn fetch_blog_post(&self, id: &str) -> Result<BlogPost, ApiError> {
        let url = self.api_url(&format!("/blog/{id}"));
        self.request(self.http.get(&url), "Error fetching blog post")
            .await
    }

    pub async fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, ApiError> {
        let url = self.api_url("/blog/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(post),
            "Error creating blog post",
        )
        .await
    }

    pub async fn update_blog_post(
        &self,
        id: &str,
        post: &NewBlogPost,
    ) -> Result<BlogPost, ApiError> {
        let url = self.api_url(&format!("/blog/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(post),
            "Error updating blog post",
        )
        .await
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/blog/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting blog post",
        )
        .await
    }

    // ===== Forum categories =====

    pub async fn fetch_forum_categories(&self) -> Result<Vec<ForumCategory>, ApiError> {
        let url = self.api_url("/forum/categories/");
        self.request(self.http.get(&url), "Error fetching forum categories")
            .await
    }

    pub async fn fetch_forum_category(&self, id: &str) -> Result<ForumCategory, ApiError> {
        let url = self.api_url(&format!("/forum/categories/{id}"));
        self.request(self.http.get(&url), "Error fetching forum category")
            .await
    }

    pub async fn create_forum_category(
        &self,
        category: &NewForumCategory,
    ) -> Result<ForumCategory, ApiError> {
        let url = self.api_url("/forum/categories/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(category),
            "Error creating forum category",
        )
        .await
    }

    pub async fn update_forum_category(
        &self,
        id: &str,
        category: &NewForumCategory,
    ) -> Result<ForumCategory, ApiError> {
        let url = self.api_url(&format!("/forum/categories/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(category),
            "Error updating forum category",
        )
        .await
    }

    pub async fn delete_forum_category(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/forum/categories/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting forum category",
        )
        .await
    }

    // ===== Forum topics =====

    pub async fn fetch_forum_topics(&self) -> Result<Vec<ForumTopicSummary>, ApiError> {
        let url = self.api_url("/forum/topics/");
        self.request(self.http.get(&url), "Error fetching forum topics")
            .await
    }

    pub async fn fetch_forum_topic(&self, id: &str) -> Result<ForumTopic, ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}"));
        self.request(self.http.get(&url), "Error fetching forum topic")
            .await
    }

    pub async fn create_forum_topic(&self, topic: &NewForumTopic) -> Result<ForumTopic, ApiError> {
        let url = self.api_url("/forum/topics/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(topic),
            "Error creating forum topic",
        )
        .await
    }

    pub async fn update_forum_topic(
        &self,
        id: &str,
        topic: &NewForumTopic,
    ) -> Result<ForumTopic, ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(topic),
            "Error updating forum topic",
        )
        .await
    }

    pub async fn delete_forum_topic(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting forum topic",
        )
        .await
    }

    /// Toggle the signed-in user's like on a topic.
    pub async fn like_forum_topic(&self, id: &str) -> Result<TopicLiked, ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}/like"));
        self.request(
            self.http.post(&url).headers(self.headers()),
            "Failed to like topic",
        )
        .await
    }

    /// Count a view on a topic. The backend returns no body.
    pub async fn record_forum_topic_view(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}/view"));
        self.request_unit(
            self.http.post(&url).headers(self.headers()),
            "Failed to register view",
        )
        .await
    }

    /// Fetch one page of comments under a topic.
    pub async fn fetch_forum_comments(
        &self,
        id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<CommentPage, ApiError> {
        let url = self.api_url(&format!(
            "/forum/topics/{id}/comments?offset={offset}&limit={limit}"
        ));
        self.request(self.http.get(&url), "Failed to fetch comments")
            .await
    }

    pub async fn create_forum_comment(
        &self,
        id: &str,
        content: &str,
    ) -> Result<ForumComment, ApiError> {
        let url = self.api_url(&format!("/forum/topics/{id}/comments"));
        let body = NewComment { content };
        self.request(
            self.http.post(&url).headers(self.headers()).json(&body),
            "Failed to create comment",
        )
        .await
    }

    // ===== Games =====

    pub async fn fetch_games(&self) -> Result<Vec<PokemonGame>, ApiError> {
        let url = self.api_url("/games/");
        self.request(self.http.get(&url), "Error fetching games")
            .await
    }

    pub async fn fetch_game(&self, id: &str) -> Result<PokemonGame, ApiError> {
        let url = self.api_url(&format!("/games/{id}"));
        self.request(self.http.get(&url), "Error fetching game").await
    }

    pub async fn create_game(&self, game: &NewPokemonGame) -> Result<PokemonGame, ApiError> {
        let url = self.api_url("/games/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(game),
            "Error creating game",
        )
        .await
    }

    pub async fn update_game(
        &self,
        id: &str,
        game: &NewPokemonGame,
    ) -> Result<PokemonGame, ApiError> {
        let url = self.api_url(&format!("/games/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(game),
            "Error updating game",
        )
        .await
    }

    pub async fn delete_game(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/games/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting game",
        )
        .await
    }

    // ===== Guides =====

    pub async fn fetch_guides(&self) -> Result<Vec<Guide>, ApiError> {
        let url = self.api_url("/guides/");
        self.request(self.http.get(&url), "Error fetching guides")
            .await
    }

    pub async fn fetch_guide(&self, id: &str) -> Result<Guide, ApiError> {
        let url = self.api_url(&format!("/guides/{id}"));
        self.request(self.http.get(&url), "Error fetching guide")
            .await
    }

    pub async fn create_guide(&self, guide: &NewGuide) -> Result<Guide, ApiError> {
        let url = self.api_url("/guides/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(guide),
            "Error posting guide",
        )
        .await
    }

    pub async fn update_guide(&self, id: &str, guide: &NewGuide) -> Result<Guide, ApiError> {
        let url = self.api_url(&format!("/guides/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(guide),
            "Error updating guide",
        )
        .await
    }

    pub async fn delete_guide(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/guides/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting guide",
        )
        .await
    }

    // ===== Shouts =====

    pub async fn fetch_shouts(&self) -> Result<Vec<Shout>, ApiError> {
        let url = self.api_url("/shouts/");
        self.request(self.http.get(&url), "Error fetching shouts")
            .await
    }

    pub async fn fetch_shout(&self, id: &str) -> Result<Shout, ApiError> {
        let url = self.api_url(&format!("/shouts/{id}"));
        self.request(self.http.get(&url), "Error fetching shout")
            .await
    }

    pub async fn create_shout(&self, shout: &NewShout) -> Result<Shout, ApiError> {
        let url = self.api_url("/shouts/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(shout),
            "Error posting shout",
        )
        .await
    }

    pub async fn update_shout(&self, id: &str, shout: &NewShout) -> Result<Shout, ApiError> {
        let url = self.api_url(&format!("/shouts/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(shout),
            "Error updating shout",
        )
        .await
    }

    pub async fn delete_shout(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/shouts/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting shout",
        )
        .await
    }

    // ===== Snapdex =====

    pub async fn fetch_snaps(&self) -> Result<Vec<Snap>, ApiError> {
        let url = self.api_url("/snapdex");
        self.request(self.http.get(&url), "Error fetching snaps")
            .await
    }

    pub async fn fetch_snap(&self, id: &str) -> Result<Snap, ApiError> {
        let url = self.api_url(&format!("/snapdex/{id}"));
        self.request(self.http.get(&url), "Error fetching snap").await
    }

    /// Snaps belonging to the signed-in user.
    pub async fn fetch_my_snaps(&self) -> Result<Vec<Snap>, ApiError> {
        let url = self.api_url("/snapdex/me");
        self.request(
            self.http.get(&url).headers(self.headers()),
            "Error fetching your snaps",
        )
        .await
    }

    pub async fn create_snap(&self, snap: &NewSnap) -> Result<Snap, ApiError> {
        let url = self.api_url("/snapdex");
        self.request(
            self.http.post(&url).headers(self.headers()).json(snap),
            "Error creating snap",
        )
        .await
    }

    pub async fn update_snap(&self, id: &str, update: &SnapUpdate) -> Result<Snap, ApiError> {
        let url = self.api_url(&format!("/snapdex/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(update),
            "Error updating snap",
        )
        .await
    }

    pub async fn delete_snap(&self, id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&format!("/snapdex/{id}"));
        self.request_unit(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting snap",
        )
        .await
    }

    // ===== Roles =====

    pub async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        let url = self.api_url("/roles/");
        self.request(self.http.get(&url), "Error fetching roles")
            .await
    }

    pub async fn fetch_role(&self, id: &str) -> Result<Role, ApiError> {
        let url = self.api_url(&format!("/roles/{id}"));
        self.request(self.http.get(&url), "Error fetching role").await
    }

    pub async fn create_role(&self, role: &NewRole) -> Result<Role, ApiError> {
        let url = self.api_url("/roles/");
        self.request(
            self.http.post(&url).headers(self.headers()).json(role),
            "Error creating role",
        )
        .await
    }

    pub async fn update_role(&self, id: &str, role: &NewRole) -> Result<Role, ApiError> {
        let url = self.api_url(&format!("/roles/{id}"));
        self.request(
            self.http.put(&url).headers(self.headers()).json(role),
            "Error updating role",
        )
        .await
    }

    pub async fn delete_role(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/roles/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting role",
        )
        .await
    }

    // ===== Permissions =====

    pub async fn fetch_permissions(&self) -> Result<Vec<Permission>, ApiError> {
        let url = self.api_url("/permissions/");
        self.request(self.http.get(&url), "Error fetching permissions")
            .await
    }

    pub async fn fetch_permission(&self, id: &str) -> Result<Permission, ApiError> {
        let url = self.api_url(&format!("/permissions/{id}"));
        self.request(self.http.get(&url), "Error fetching permission")
            .await
    }

    pub async fn create_permission(
        &self,
        permission: &NewPermission,
    ) -> Result<Permission, ApiError> {
        let url = self.api_url("/permissions/");
        self.request(
            self.http
                .post(&url)
                .headers(self.headers())
                .json(permission),
            "Error creating permission",
        )
        .await
    }

    pub async fn update_permission(
        &self,
        id: &str,
        permission: &NewPermission,
    ) -> Result<Permission, ApiError> {
        let url = self.api_url(&format!("/permissions/{id}"));
        self.request(
            self.http
                .put(&url)
                .headers(self.headers())
                .json(permission),
            "Error updating permission",
        )
        .await
    }

    pub async fn delete_permission(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let url = self.api_url(&format!("/permissions/{id}"));
        self.request(
            self.http.delete(&url).headers(self.headers()),
            "Error deleting permission",
        )
        .await
    }

    // ===== Pokedex =====

    /// The signed-in trainer's pokedex.
    pub async fn fetch_pokedex(&self) -> Result<PokedexResponse, ApiError> {
        let url = self.api_url("/pokedex/");
        self.request(
            self.http.get(&url).headers(self.headers()),
            "Error fetching pokedex",
        )
        .await
    }

    // ===== PokeAPI =====

    /// One page of the species listing from the PokeAPI.
    pub async fn list_pokemon(&self, page: Pagination) -> Result<Vec<NamedResource>, ApiError> {
        let url = self.pokeapi_url(&format!(
            "/pokemon?offset={}&limit={}",
            page.offset, page.limit
        ));
        let response: PokemonListing = self
            .request(self.http.get(&url), "Error fetching pokemon list")
            .await?;
        Ok(response.results)
    }

    /// Full data for one pokemon by name or pokedex number.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<PokemonData, ApiError> {
        let url = self.pokeapi_url(&format!("/pokemon/{name_or_id}"));
        self.request(self.http.get(&url), "Error fetching pokemon")
            .await
    }

    /// Hydrate a listing page: fetch every listed pokemon's data with
    /// bounded concurrency, returned in pokedex order.
    pub async fn fetch_pokemon_page(&self, page: Pagination) -> Result<Vec<PokemonData>, ApiError> {
        let listing = self.list_pokemon(page).await?;
        debug!(count = listing.len(), "hydrating pokemon listing page");

        let fetches = listing
            .into_iter()
            .map(|entry| async move { self.fetch_pokemon(&entry.name).await });
        let results: Vec<Result<PokemonData, ApiError>> = stream::iter(fetches)
            .buffer_unordered(MAX_CONCURRENT_POKEAPI_REQUESTS)
            .collect()
            .await;

        let mut pokemons = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        pokemons.sort_by_key(|p| p.id);
        Ok(pokemons)
    }
}

// Wire types for request/response bodies

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct UsernameLoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct NewComment<'a> {
    content: &'a str,
}

/// Login/registration response. The user snapshot is optional - some
/// deployments return only the token and expect a follow-up profile fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicLiked {
    pub liked: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokedexResponse {
    pub pokemons: Vec<PokedexEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct PokemonListing {
    results: Vec<NamedResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_without_token() {
        let jar = CookieJar::new();
        let headers = auth_headers(&jar);
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer ");
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_auth_headers_with_token() {
        let jar = CookieJar::new();
        jar.set(TOKEN_COOKIE, "abc");
        let headers = auth_headers(&jar);
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_auth_headers_reads_token_fresh_each_call() {
        let jar = CookieJar::new();
        jar.set(TOKEN_COOKIE, "first");
        assert_eq!(
            auth_headers(&jar).get(header::AUTHORIZATION).unwrap(),
            "Bearer first"
        );
        jar.set(TOKEN_COOKIE, "second");
        assert_eq!(
            auth_headers(&jar).get(header::AUTHORIZATION).unwrap(),
            "Bearer second"
        );
    }

    #[test]
    fn test_auth_headers_degrades_unsafe_token_to_empty() {
        let jar = CookieJar::new();
        jar.set(TOKEN_COOKIE, "line\nbreak");
        let headers = auth_headers(&jar);
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer ");
    }

    #[test]
    fn test_auth_response_user_is_optional() {
        let token_only: AuthResponse =
            serde_json::from_str(r#"{"token":"T1"}"#).expect("token-only response");
        assert_eq!(token_only.token, "T1");
        assert!(token_only.user.is_none());

        let with_user: AuthResponse =
            serde_json::from_str(r#"{"token":"T1","user":{"id":"1","username":"ash"}}"#)
                .expect("token+user response");
        assert_eq!(with_user.user.unwrap().username, "ash");
    }

    #[test]
    fn test_api_url_joins_config_base() {
        let client = ApiClient::new(Config {
            base_url: "http://localhost:3000".to_string(),
            pokeapi_url: "https://pokeapi.co/api/v2".to_string(),
        })
        .expect("client");
        assert_eq!(client.api_url("/blog/"), "http://localhost:3000/api/blog/");
        assert_eq!(
            client.pokeapi_url("/pokemon/25"),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }
}
