//! Offline inspection of saved API responses.
//!
//! Files are classified by suffix: `*.player.json` holds a player profile and
//! `*.battlelog.json` holds a battle log. Everything else is skipped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api_models::{BattleLog, BattleOutcome, Player};
use crate::decode::{decode_battle_log, decode_player};
use crate::error::InspectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Player,
    BattleLog,
}

impl ResponseKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".player.json") {
            Some(ResponseKind::Player)
        } else if name.ends_with(".battlelog.json") {
            Some(ResponseKind::BattleLog)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Player {
        tag: String,
        name: String,
        trophies: i32,
        deck_size: usize,
        maxed_cards: usize,
    },
    BattleLog {
        battles: usize,
        wins: usize,
        losses: usize,
        draws: usize,
        inconsistent: usize,
    },
}

impl Summary {
    pub fn of_player(player: &Player) -> Self {
        Summary::Player {
            tag: player.tag.clone(),
            name: player.name.clone(),
            trophies: player.trophies,
            deck_size: player.current_deck.len(),
            maxed_cards: player.maxed_cards().count(),
        }
    }

    pub fn of_battle_log(log: &BattleLog) -> Self {
        let count = |outcome: BattleOutcome| log.iter().filter(|b| b.outcome() == outcome).count();
        Summary::BattleLog {
            battles: log.len(),
            wins: count(BattleOutcome::Victory),
            losses: count(BattleOutcome::Defeat),
            draws: count(BattleOutcome::Draw),
            inconsistent: log.iter().filter(|b| !b.is_consistent()).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Player {
                tag,
                name,
                trophies,
                deck_size,
                maxed_cards,
            } => write!(
                f,
                "player {tag} ({name}): {trophies} trophies, {deck_size} cards in deck, {maxed_cards} maxed"
            ),
            Summary::BattleLog {
                battles,
                wins,
                losses,
                draws,
                inconsistent,
            } => {
                write!(f, "battle log: {battles} battles, {wins}W/{losses}L/{draws}D")?;
                if *inconsistent > 0 {
                    write!(f, ", {inconsistent} with winner not matching crowns")?;
                }
                Ok(())
            }
        }
    }
}

/// Reads and decodes one saved response.
pub fn inspect_file(path: &Path, kind: ResponseKind) -> Result<Summary, InspectError> {
    let body = fs::read(path).map_err(|source| InspectError::Io {
        path: path.to_owned(),
        source,
    })?;
    let summary = match kind {
        ResponseKind::Player => decode_player(&body).map(|p| Summary::of_player(&p)),
        ResponseKind::BattleLog => decode_battle_log(&body).map(|log| Summary::of_battle_log(&log)),
    };
    summary.map_err(|source| InspectError::Decode {
        path: path.to_owned(),
        source,
    })
}

/// Lists the recognised response files in `dir`, sorted by file name.
pub fn response_files(dir: &Path) -> Result<Vec<(PathBuf, ResponseKind)>, InspectError> {
    let io_err = |source: std::io::Error| InspectError::Io {
        path: dir.to_owned(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        match ResponseKind::from_path(&path) {
            Some(kind) if path.is_file() => files.push((path, kind)),
            _ => debug!("skipping {}", path.display()),
        }
    }
    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}
