//! Drop replay: put one piece on a named board, report the landing queries and
//! hard-drop it.

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{Board, BoardFixture};
use crate::engine::ActivePiece;
use crate::snapshot::BoardSnapshot;
use crate::types::{PieceKind, Position, Rotation, SPAWN_POSITION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub fixture: BoardFixture,
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub position: Position,
    pub json: bool,
    pub verbose: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            fixture: BoardFixture::Empty,
            kind: PieceKind::Z,
            rotation: Rotation::North,
            position: SPAWN_POSITION,
            json: false,
            verbose: false,
        }
    }
}

pub const USAGE: &str = "usage: tetrazone [--board empty|one-tile|two-tiles|four-tiles|with-hole] \
[--piece i|j|l|o|s|t|z] [--rotation 0-3] [--row N] [--col N] [--json] [--verbose]";

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("replay: missing value for {}", flag))
}

/// Parse command line arguments (without the program name)
///
/// Returns `Ok(None)` for `--help`.
pub fn parse_replay_args(args: &[String]) -> Result<Option<ReplayConfig>> {
    let mut config = ReplayConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--board" => {
                i += 1;
                let v = value(args, i, "--board")?;
                config.fixture = BoardFixture::from_str(v)
                    .ok_or_else(|| anyhow!("replay: unknown board: {}", v))?;
            }
            "--piece" => {
                i += 1;
                let v = value(args, i, "--piece")?;
                config.kind =
                    PieceKind::from_str(v).ok_or_else(|| anyhow!("replay: unknown piece: {}", v))?;
            }
            "--rotation" => {
                i += 1;
                let v = value(args, i, "--rotation")?;
                config.rotation = Rotation::from_str(v)
                    .ok_or_else(|| anyhow!("replay: invalid --rotation value: {}", v))?;
            }
            "--row" => {
                i += 1;
                let v = value(args, i, "--row")?;
                config.position.row = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("replay: invalid --row value: {}", v))?;
            }
            "--col" => {
                i += 1;
                let v = value(args, i, "--col")?;
                config.position.col = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("replay: invalid --col value: {}", v))?;
            }
            "--json" => config.json = true,
            "--verbose" | "-v" => config.verbose = true,
            "--help" | "-h" => return Ok(None),
            other => {
                return Err(anyhow!("replay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub before: Board,
    pub piece: ActivePiece,
    pub landed: bool,
    pub target_row: i32,
    pub cleared_rows: Vec<usize>,
    pub after: Board,
}

#[derive(Debug, Clone, Serialize)]
struct ReplayJson {
    before: BoardSnapshot,
    target_row: i32,
    cleared_rows: Vec<usize>,
    after: BoardSnapshot,
}

/// Build the board, check the piece at its anchor, then hard-drop and lock it
pub fn run_replay(config: &ReplayConfig) -> Result<ReplayReport> {
    let before = config.fixture.build();
    let piece = ActivePiece::at(config.kind, config.rotation, config.position);

    if !piece.fits(&before) {
        return Err(anyhow!(
            "replay: {} piece (rotation {}) does not fit at row {}, col {} on board {}",
            config.kind.as_str(),
            config.rotation.index(),
            config.position.row,
            config.position.col,
            config.fixture.as_str()
        ));
    }

    let landed = piece.landed(&before)?;
    let target_row = piece.ghost_row(&before)?;
    debug!(landed, target_row, "queries at anchor");

    let mut after = before.clone();
    let mut dropped = piece;
    let distance = dropped.quick_drop(&after)?;
    let outcome = dropped.lock(&mut after)?;
    info!(
        distance,
        row = outcome.position.row,
        cleared = outcome.cleared_rows.len(),
        "piece dropped"
    );

    Ok(ReplayReport {
        before,
        piece,
        landed,
        target_row,
        cleared_rows: outcome.cleared_rows.to_vec(),
        after,
    })
}

impl ReplayReport {
    /// Text report in the board dump format
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.before.to_string());
        out.push('\n');
        out.push_str(&format!("piece_landed: {}\n", self.landed));
        out.push_str(&format!("quick drop row: {}\n", self.target_row));
        if !self.cleared_rows.is_empty() {
            out.push_str(&format!("cleared rows: {:?}\n", self.cleared_rows));
        }
        out.push('\n');
        out.push_str(&self.after.to_string());
        out
    }

    pub fn render_json(&self) -> Result<String> {
        let report = ReplayJson {
            before: BoardSnapshot::capture(&self.before, Some(&self.piece))?,
            target_row: self.target_row,
            cleared_rows: self.cleared_rows.clone(),
            after: BoardSnapshot::capture(&self.after, None)?,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
