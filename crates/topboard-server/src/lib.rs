//! HTTP server for the topboard leaderboard.
//!
//! Serves a bounded top-N board over a small REST API, validates submissions
//! before they reach the board, and keeps a JSON snapshot on disk in step
//! with every change.
//!
//! | Method   | Path          | Effect                                  |
//! |----------|---------------|-----------------------------------------|
//! | `GET`    | `/v1/health`  | liveness probe                          |
//! | `GET`    | `/v1/info`    | version, capacity and current size      |
//! | `GET`    | `/v1/scores`  | standings, highest first                |
//! | `POST`   | `/v1/scores`  | submit `{ "name", "score" }`            |
//! | `DELETE` | `/v1/scores`  | clear the board                         |

pub mod board;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;

pub use board::Leaderboard;
pub use config::{CorsConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::TopboardServer;
pub use state::AppState;
pub use validation::{SubmitScore, MAX_SCORE, MIN_SCORE};
