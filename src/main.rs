use rosterhub::app::RosterService;
use rosterhub::directory::http::HttpPlayerDirectory;
use rosterhub::directory::mock::MockPlayerDirectory;
use rosterhub::directory::PlayerDirectory;
use rosterhub::infrastructure::storage::FileStorage;
use rosterhub::session::{SessionStatus, SessionStore};

const DEFAULT_API_URL: &str = "https://api.balldontlie.io/epl/v1/players";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_SEASON: u16 = 2024;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let data_dir = std::env::var("ROSTER_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("ROSTER_DATA_DIR not set, using default");
        "./data".to_string()
    });

    let storage = match FileStorage::new(&data_dir) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Failed to open storage at {data_dir}: {e}");
            std::process::exit(1);
        }
    };

    // Hydrate the session first: protected state must not be trusted as
    // "logged out" until this completes.
    let mut session = SessionStore::new();
    if let Err(e) = session.hydrate(&storage) {
        tracing::error!("Failed to hydrate session: {e}");
        std::process::exit(1);
    }

    match session.status() {
        SessionStatus::Authenticated(user) => {
            tracing::info!(user = %user.name, "restored session");
        }
        SessionStatus::RedirectToLogin => {
            tracing::info!("no session found, presentation should show the login view");
        }
        SessionStatus::Hydrating => unreachable!("hydrate just completed"),
    }

    let mut service = match RosterService::hydrate(storage) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to hydrate roster snapshot: {e}");
            std::process::exit(1);
        }
    };

    let page_size = std::env::var("PLAYER_PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);

    // Without an API key the live directory is unreachable; fall back to
    // the deterministic mock population.
    let directory: Box<dyn PlayerDirectory> = match std::env::var("PLAYER_API_KEY") {
        Ok(api_key) => {
            let base_url =
                std::env::var("PLAYER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
            tracing::info!(url = %base_url, "using live player directory");
            Box::new(HttpPlayerDirectory::new(
                base_url,
                api_key,
                DEFAULT_SEASON,
                page_size,
            ))
        }
        Err(_) => {
            tracing::warn!("PLAYER_API_KEY not set, using mock player directory");
            Box::new(MockPlayerDirectory::new(page_size, 50))
        }
    };

    match service.sync_from_directory(directory.as_ref()).await {
        Ok(added) => tracing::info!(added, "player directory synced"),
        Err(e) => tracing::error!("Directory sync failed, existing data untouched: {e}"),
    }

    let store = service.store();
    tracing::info!(
        teams = store.teams().len(),
        players = store.players().len(),
        available = store.get_available_players(None).len(),
        "roster ready"
    );
}
