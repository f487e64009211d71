use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api_models::{BattleLog, Card, Player};
use crate::error::DecodeError;

/// Decodes a raw response body into `T`, tagging any failure with `entity`.
pub fn decode<T: DeserializeOwned>(entity: &'static str, body: &[u8]) -> Result<T, DecodeError> {
    debug!(entity, bytes = body.len(), "decoding response");
    serde_json::from_slice(body).map_err(|e| {
        warn!(entity, line = e.line(), column = e.column(), "decode failed: {}", e);
        DecodeError::new(entity, e)
    })
}

/// Decodes the body of the player endpoint.
pub fn decode_player(body: &[u8]) -> Result<Player, DecodeError> {
    decode("Player", body)
}

/// Decodes the body of the battle log endpoint, keeping the API's battle order.
pub fn decode_battle_log(body: &[u8]) -> Result<BattleLog, DecodeError> {
    decode("BattleLog", body)
}

pub fn decode_card(body: &[u8]) -> Result<Card, DecodeError> {
    decode("Card", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_models::RequiredForUpgrade;

    #[test]
    fn card_with_maxed_upgrade() {
        let card = decode_card(br#"{"name": "Zap", "level": 13, "requiredForUpgrade": "Maxed"}"#)
            .unwrap();
        assert_eq!(card.required_for_upgrade, RequiredForUpgrade::MAXED);
        assert!(card.is_maxed());
        assert_eq!(card.level, 13);
    }

    #[test]
    fn card_with_numeric_upgrade() {
        let card = decode_card(br#"{"name": "Zap", "requiredForUpgrade": 800}"#).unwrap();
        assert_eq!(card.required_for_upgrade.get(), 800);
        assert!(!card.is_maxed());
    }

    #[test]
    fn card_with_out_of_range_upgrade_count() {
        let card = decode_card(br#"{"requiredForUpgrade": -7}"#).unwrap();
        assert_eq!(card.required_for_upgrade.get(), -7);
        assert!(!card.is_maxed());

        let card = decode_card(br#"{"requiredForUpgrade": 4294967296}"#).unwrap();
        assert_eq!(card.required_for_upgrade.get(), 4_294_967_296);
    }

    #[test]
    fn card_with_bool_upgrade_fails() {
        let err = decode_card(br#"{"name": "Zap", "requiredForUpgrade": true}"#).unwrap_err();
        assert_eq!(err.entity, "Card");
        assert!(err.is_data());
        assert!(err.to_string().starts_with("failed to decode Card: "));
    }

    #[test]
    fn card_with_object_upgrade_fails() {
        let err = decode_card(br#"{"requiredForUpgrade": {"count": 3}}"#).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn truncated_body_is_a_syntax_error() {
        let err = decode_player(br##"{"tag": "#2PP", "name""##).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.entity, "Player");
    }

    #[test]
    fn battle_log_must_be_an_array() {
        let err = decode_battle_log(br#"{"team": []}"#).unwrap_err();
        assert!(err.is_data());
        assert_eq!(err.entity, "BattleLog");
    }
}
