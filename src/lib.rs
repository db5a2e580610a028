//! # EDH Ledger
//!
//! A Commander (EDH) pod tracker's statistics core: winrate analytics
//! computed from recorded games.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (games, seats, roster, series)
//! - **calculate**: Winrate statistics and derived metrics computation
//! - **storage**: JSONL snapshot loading
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
