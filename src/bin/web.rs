//! Single binary web server: the game page from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, THINK_DELAY_MS (computer "thinking" time, 0 = instant),
//! GAME_IDLE_TIMEOUT_SECS (idle games are dropped after this long).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use rock_paper_scissors_web::{
    Game, MatchView, RandomGenerator, Sign, SignInfo, TurnError, DEFAULT_THINK_DELAY,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a game (one per browser session).
type GameId = Uuid;

/// Session key holding the id of the browser's current game.
const SESSION_GAME_KEY: &str = "game_id";

/// How often the idle sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Per-game entry: the game + last activity time (for auto-cleanup).
struct GameEntry {
    game: Game<RandomGenerator>,
    last_activity: Instant,
}

impl GameEntry {
    fn new(think_delay: Duration) -> Self {
        Self {
            game: Game::new(RandomGenerator::from_entropy(), think_delay),
            last_activity: Instant::now(),
        }
    }
}

/// In-memory games by id. Dropping an entry cancels its pending turn.
struct Games {
    entries: RwLock<HashMap<GameId, GameEntry>>,
    think_delay: Duration,
}

impl Games {
    fn new(think_delay: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            think_delay,
        }
    }
}

type AppState = Data<Games>;

/// Runtime settings read from the environment.
struct Settings {
    host: String,
    port: u16,
    think_delay: Duration,
    idle_timeout: Duration,
}

impl Settings {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let port = env_parse("PORT").unwrap_or_else(default_port);
        let think_delay = env_parse("THINK_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_THINK_DELAY);
        let idle_timeout = env_parse("GAME_IDLE_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or_else(default_idle_timeout);
        Self {
            host,
            port,
            think_delay,
            idle_timeout,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_idle_timeout() -> Duration {
    Duration::from_secs(6 * 3600)
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// A game's view plus its id (client stores the id for subsequent requests).
#[derive(Serialize)]
struct GameResponse {
    id: GameId,
    #[serde(flatten)]
    view: MatchView,
}

impl GameResponse {
    fn new(id: GameId, entry: &GameEntry) -> Self {
        Self {
            id,
            view: entry.game.view(),
        }
    }
}

#[derive(Deserialize)]
struct SelectSignBody {
    sign: Sign,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn game_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" }))
}

/// Look up a game, refresh its last_activity and run `f` on it (404 if not found).
fn with_game(state: &AppState, id: GameId, f: impl FnOnce(&GameEntry)) -> HttpResponse {
    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(entry);
            HttpResponse::Ok().json(GameResponse::new(id, entry))
        }
        None => game_not_found(),
    }
}

/// Create a game, register it in `games` and bind it to the browser session.
fn insert_new_game(
    games: &mut HashMap<GameId, GameEntry>,
    think_delay: Duration,
    session: &Session,
) -> HttpResponse {
    let id = Uuid::new_v4();
    let entry = GameEntry::new(think_delay);
    let body = GameResponse::new(id, &entry);
    games.insert(id, entry);
    if let Err(e) = session.insert(SESSION_GAME_KEY, id) {
        log::warn!("Could not store game {} in session: {}", id, e);
    }
    log::info!("Created game {}", id);
    HttpResponse::Ok().json(body)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "rock-paper-scissors-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The three signs with their labels and glyphs (for rendering the buttons).
#[get("/api/signs")]
async fn api_signs() -> HttpResponse {
    HttpResponse::Ok().json(Sign::ALL.map(SignInfo::from))
}

/// The session's game; created on first visit (or after it was cleaned up).
#[get("/api/game")]
async fn api_session_game(state: AppState, session: Session) -> HttpResponse {
    let stored = match session.get::<GameId>(SESSION_GAME_KEY) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Unreadable session, starting a new game: {}", e);
            None
        }
    };
    // Lookup and create-if-missing under one guard.
    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Some(id) = stored {
        if let Some(entry) = g.get_mut(&id) {
            entry.last_activity = Instant::now();
            return HttpResponse::Ok().json(GameResponse::new(id, entry));
        }
    }
    insert_new_game(&mut g, state.think_delay, &session)
}

/// Start a new game and make it the session's game.
#[post("/api/games")]
async fn api_create_game(state: AppState, session: Session) -> HttpResponse {
    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    insert_new_game(&mut g, state.think_delay, &session)
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    with_game(&state, path.id, |_| {})
}

/// Pick a sign. Ignored while the previous turn is still resolving.
#[post("/api/games/{id}/select")]
async fn api_select_sign(
    state: AppState,
    path: Path<GamePath>,
    body: Json<SelectSignBody>,
) -> HttpResponse {
    let id = path.id;
    with_game(&state, id, |entry| match entry.game.select_sign(body.sign) {
        Ok(_) => {}
        Err(TurnError::Busy) => log::debug!("Game {}: selection while busy ignored", id),
        Err(e) => log::debug!("Game {}: selection rejected: {}", id, e),
    })
}

/// Reset scores and signs; cancels a turn that is still resolving.
#[post("/api/games/{id}/reset")]
async fn api_reset_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    with_game(&state, path.id, |entry| entry.game.reset())
}

/// Tear a game down (pending turn is cancelled).
#[delete("/api/games/{id}")]
async fn api_delete_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.entries.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove(&path.id) {
        Some(_) => {
            log::info!("Removed game {}", path.id);
            HttpResponse::NoContent().finish()
        }
        None => game_not_found(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    let bind = (settings.host.as_str(), settings.port);
    log::info!(
        "Starting server at http://{}:{} (thinking delay {:?})",
        bind.0,
        bind.1,
        settings.think_delay
    );

    let state = Data::new(Games::new(settings.think_delay));
    // Sessions do not survive a restart; neither do the games they point to.
    let session_key = Key::generate();

    // Background task: periodically remove games with no activity for idle_timeout
    let state_cleanup = state.clone();
    let idle_timeout = settings.idle_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.entries.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < idle_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(session_key.clone()))
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_signs)
        .service(api_session_game)
        .service(api_create_game)
        .service(api_get_game)
        .service(api_select_sign)
        .service(api_reset_game)
        .service(api_delete_game)
        .service(Files::new("/static", "static"));
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
