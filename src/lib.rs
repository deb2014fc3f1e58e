//! poker-trainer: Texas Hold'em win-probability trainer
//!
//! Goals:
//! - Deterministic hand evaluation over up to seven cards
//! - A fixed, explainable win-probability curve for training estimates
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: estimate a Hold'em hand
//! ```
//! use poker_trainer::evaluator::{evaluate_holdem, HandRank};
//! use poker_trainer::hand::{Board, HoleCards};
//! use poker_trainer::probability::{estimate_for, GameMode, GamePhase, ModeContext};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.rank(), Some(HandRank::Pair));
//!
//! let p = estimate_for(&eval, GamePhase::River, 1, GameMode::Normal, ModeContext::default())
//!     .unwrap();
//! assert!((p - 0.35).abs() < 1e-12);
//! ```
//!
//! ## TUI
//! Run the interactive trainer with:
//! ```sh
//! cargo run --bin poker-trainer
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod probability;
pub mod showdown;
pub mod trainer;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
