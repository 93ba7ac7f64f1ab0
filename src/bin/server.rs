use std::{
    env,
    fs::OpenOptions,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::{Args as ClapArgs, Parser};
use rusqlite::Connection;
use time_tz::timezones;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use budget_tracker::{
    AppState, DEFAULT_TRANSACTION_TABLE, RestStoreConfig, RestTransactionStore,
    SqliteTransactionStore, TransactionStore, UserId, build_router, graceful_shutdown,
    initialize_db, logging_middleware,
};

/// The web server for the budget tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    store: StoreArgs,

    /// The name of the table holding transactions in the hosted store.
    #[arg(long, default_value = DEFAULT_TRANSACTION_TABLE, requires = "store_url")]
    table: String,

    /// The ID of the user whose transactions are shown.
    #[arg(long)]
    user_id: String,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the timezone to show dates in, e.g. "Europe/Paris".
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// Log the head and body of every request and response.
    #[arg(long)]
    log_requests: bool,
}

/// Where transactions are stored.
#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
struct StoreArgs {
    /// File path to a local SQLite database.
    #[arg(long)]
    db_path: Option<String>,

    /// The base URL of a hosted PostgREST API, e.g. "https://xyz.supabase.co/rest/v1".
    ///
    /// The environment variables `STORE_API_KEY` and `STORE_ACCESS_TOKEN` must be set.
    #[arg(long)]
    store_url: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if timezones::get_by_name(&args.timezone).is_none() {
        panic!("Unknown timezone {}", args.timezone);
    }

    let store = create_store(&args);
    let state = AppState::new(store, UserId::new(args.user_id), &args.timezone);

    let mut router = add_tracing_layer(build_router(state));

    if args.log_requests {
        router = router.layer(middleware::from_fn(logging_middleware));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped with an error");
}

fn create_store(args: &Args) -> Arc<dyn TransactionStore> {
    match (&args.store.db_path, &args.store.store_url) {
        (Some(db_path), _) => {
            let connection = Connection::open(db_path)
                .unwrap_or_else(|error| panic!("Could not open database at {db_path}: {error}"));
            initialize_db(&connection).expect("Could not initialize database");

            tracing::info!("Using SQLite store at {db_path}");
            Arc::new(SqliteTransactionStore::new(Arc::new(Mutex::new(connection))))
        }
        (None, Some(store_url)) => {
            let config = RestStoreConfig {
                base_url: store_url.clone(),
                table: args.table.clone(),
                api_key: env::var("STORE_API_KEY")
                    .expect("The environment variable 'STORE_API_KEY' must be set"),
                access_token: env::var("STORE_ACCESS_TOKEN")
                    .expect("The environment variable 'STORE_ACCESS_TOKEN' must be set"),
            };

            tracing::info!("Using hosted store at {store_url}");
            Arc::new(RestTransactionStore::new(reqwest::Client::new(), config))
        }
        (None, None) => unreachable!("clap requires one of --db-path or --store-url"),
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
