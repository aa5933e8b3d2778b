use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::post,
};
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::log;
use crate::messages::{MoveRequest, MoveResponse, NewGameRequest, NewGameResponse};
use crate::server_config::ServerConfig;
use crate::session::{BotDifficulty, GameSession, GameStatus, Mode};

#[derive(Clone)]
pub struct WebServerState {
    pub session: Arc<Mutex<GameSession>>,
}

pub async fn run_web_server(config: ServerConfig) {
    let state = WebServerState {
        session: Arc::new(Mutex::new(GameSession::new(
            Mode::default(),
            BotDifficulty::default(),
        ))),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/new_game", post(new_game_handler))
        .route("/move", post(move_handler))
        .fallback_service(ServeDir::new(PathBuf::from(&config.static_files_path)))
        .layer(cors)
        .with_state(state);

    log!("Web server listening on {}", config.listen_address);

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Web server error");

    log!("Server shut down gracefully");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    log!("Shutdown signal received");
}

async fn new_game_handler(
    State(state): State<WebServerState>,
    Json(request): Json<NewGameRequest>,
) -> Json<NewGameResponse> {
    log!(
        "New game: mode {:?}, difficulty {:?}",
        request.mode,
        request.difficulty
    );

    let mut session = state.session.lock().await;
    *session = GameSession::new(request.mode, request.difficulty);

    Json(NewGameResponse {
        status: "started",
        mode: request.mode,
        difficulty: request.difficulty,
    })
}

async fn move_handler(
    State(state): State<WebServerState>,
    Json(request): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let mut session = state.session.lock().await;
    let response = session.apply_move(request.row, request.col);

    if response.status == "ok" {
        match session.status() {
            GameStatus::Won(mark) => log!("Game over: {:?} wins", mark),
            GameStatus::Drawn => log!("Game over: draw"),
            GameStatus::InProgress => {}
        }
    } else {
        log!(
            "Rejected move ({}, {}): {}",
            request.row,
            request.col,
            response.status
        );
    }

    Json(response)
}
