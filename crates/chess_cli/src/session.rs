//! Text command handling for one game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chess_rules::{Color, Game, GameClock, GameState, Square};
use tracing::warn;

use crate::config::CliConfig;

pub const HELP: &str = "commands: show | moves <sq> | move <from> <to> | state | history | \
captured <white|black> | material | save [file] | reset | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub struct Session {
    game: Game,
    save_dir: PathBuf,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            game: Game::with_config(config.engine.clone()),
            save_dir: config.save_dir.clone(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn execute(&mut self, line: &str) -> Outcome {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = parts.first() else {
            return Outcome::Reply(String::new());
        };

        let reply = match cmd {
            "show" => self.game.board().to_string(),
            "moves" => match parts.get(1).and_then(|s| Square::from_algebraic(s)) {
                Some(from) => self.moves(from),
                None => "usage: moves <square>".to_string(),
            },
            "move" => match (
                parts.get(1).and_then(|s| Square::from_algebraic(s)),
                parts.get(2).and_then(|s| Square::from_algebraic(s)),
            ) {
                (Some(from), Some(to)) => self.play(from, to),
                _ => "usage: move <from> <to>".to_string(),
            },
            "state" => self.state(),
            "history" => self.history(),
            "captured" => match parts.get(1).copied() {
                Some("white") => self.captured(Color::White),
                Some("black") => self.captured(Color::Black),
                _ => "usage: captured <white|black>".to_string(),
            },
            "material" => {
                let (white, black) = self.game.material_balance();
                format!("white {white} black {black}")
            }
            "save" => self.save(parts.get(1).copied()),
            "reset" => {
                self.game.reset();
                "new game".to_string()
            }
            "quit" => return Outcome::Quit,
            _ => HELP.to_string(),
        };
        Outcome::Reply(reply)
    }

    fn moves(&mut self, from: Square) -> String {
        match self.game.legal_moves_from(from) {
            Ok(targets) if targets.is_empty() => format!("{from}: no legal moves"),
            Ok(targets) => {
                let list: Vec<String> = targets.iter().map(|t| t.to_algebraic()).collect();
                format!("{from}: {}", list.join(" "))
            }
            Err(e) => e.to_string(),
        }
    }

    fn play(&mut self, from: Square, to: Square) -> String {
        match self.game.try_move(from, to) {
            Ok(record) => {
                let state = self.game.state();
                if state == GameState::Playing {
                    format!("{}. {}", record.move_number, record.notation)
                } else {
                    format!("{}. {} ({state})", record.move_number, record.notation)
                }
            }
            Err(e) => {
                if e.is_fatal() {
                    warn!(error = %e, "move aborted");
                }
                e.to_string()
            }
        }
    }

    fn state(&self) -> String {
        let status = self.game.status();
        let clock = self.game.clock();
        format!(
            "{} to move, {}, {} moves played (white {}, black {})",
            status.active_color,
            status.state,
            status.move_count,
            GameClock::format_time(clock.elapsed(Color::White)),
            GameClock::format_time(clock.elapsed(Color::Black)),
        )
    }

    fn history(&self) -> String {
        if self.game.history().is_empty() {
            return "no moves yet".to_string();
        }
        self.game
            .history()
            .iter()
            .map(|r| format!("{}. {}", r.move_number, r.notation))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn captured(&self, c: Color) -> String {
        let kinds = self.game.captured_pieces(c);
        if kinds.is_empty() {
            return format!("no {c} pieces captured");
        }
        let symbols: String = kinds
            .iter()
            .map(|k| k.symbol(c, self.game.config().notation))
            .collect();
        format!("{c} lost: {symbols}")
    }

    fn save(&self, name: Option<&str>) -> String {
        let file = match name {
            Some(n) => n.to_string(),
            None => {
                let stamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                format!("game_{stamp}.json")
            }
        };
        let path = self.save_dir.join(file);
        match self.game.snapshot().save(&path) {
            Ok(()) => format!("saved {}", path.display()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                format!("save failed: {e}")
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
