//! Response model for the Clash Royale stats API.
//!
//! Entities are plain serde structs. The one exception is a card's
//! `requiredForUpgrade`, which the API sends as either a number or the string
//! `"Maxed"`; see [`RequiredForUpgrade`].

pub mod api_models;
pub mod config;
pub mod decode;
pub mod error;
pub mod inspect;
mod required_for_upgrade;

pub use api_models::*;
pub use decode::{decode, decode_battle_log, decode_card, decode_player};
pub use error::DecodeError;
