//! Line-oriented command driver.
//!
//! Each stdin line is one command. Commands that change state, and
//! `layout`, answer with the current layout list as a single JSON line.

use std::str::FromStr;

use folio_common::types::{Rect, TileId, TileKind};
use folio_common::{Action, FolioError};
use folio_platform::{parse_keybind, KeyCombo, KeybindRegistry};
use folio_tiling::WindowController;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spawn(TileKind),
    /// Close the given tile, or the focused one.
    Close(Option<TileId>),
    Focus(TileId),
    Key(String),
    Resize { width: f64, height: f64 },
    Layout,
    Tiles,
    Clear,
    Help,
}

impl FromStr for Command {
    type Err = FolioError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        let bad = |msg: String| FolioError::Other(msg);
        match (verb, rest.as_slice()) {
            ("spawn", [kind]) => Ok(Command::Spawn(kind.parse().map_err(bad)?)),
            ("close", []) => Ok(Command::Close(None)),
            ("close", [id]) => Ok(Command::Close(Some(TileId::from(*id)))),
            ("focus", [id]) => Ok(Command::Focus(TileId::from(*id))),
            ("key", [combo]) => Ok(Command::Key(combo.to_string())),
            ("resize", [w, h]) => {
                let parse = |s: &str| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && *v >= 0.0)
                        .ok_or_else(|| bad(format!("invalid size: {s}")))
                };
                Ok(Command::Resize {
                    width: parse(w)?,
                    height: parse(h)?,
                })
            }
            ("layout", []) => Ok(Command::Layout),
            ("tiles", []) => Ok(Command::Tiles),
            ("clear", []) => Ok(Command::Clear),
            ("help", []) => Ok(Command::Help),
            ("", _) => Err(bad("empty command".into())),
            _ => Err(bad(format!("unrecognized command: {line}"))),
        }
    }
}

pub struct Driver {
    controller: WindowController,
    registry: KeybindRegistry,
}

impl Driver {
    pub fn new(controller: WindowController, registry: KeybindRegistry) -> Self {
        Self {
            controller,
            registry,
        }
    }

    pub fn controller(&self) -> &WindowController {
        &self.controller
    }

    /// Parse and run one line. Blank lines and `#` comments produce no output.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, FolioError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        self.run(command).map(Some)
    }

    pub fn run(&mut self, command: Command) -> Result<String, FolioError> {
        match command {
            Command::Spawn(kind) => {
                self.controller.spawn_tile(kind, None)?;
            }
            Command::Close(Some(id)) => self.controller.close_tile(&id)?,
            Command::Close(None) => {
                if !self.controller.close_focused() {
                    return Err(FolioError::Other("no focused tile".into()));
                }
            }
            Command::Focus(id) => self.controller.focus_tile(&id)?,
            Command::Key(binding) => {
                let combo = KeyCombo::from_keybind(&parse_keybind(&binding)?);
                if !self.controller.handle_key(&self.registry, &combo) {
                    tracing::debug!("key {binding} had no effect");
                }
            }
            Command::Resize { width, height } => {
                self.controller.on_resize(Rect::new(0.0, 0.0, width, height));
            }
            Command::Clear => self.controller.clear(),
            Command::Layout => {}
            Command::Tiles => return to_json(&self.controller.tiles()),
            Command::Help => return Ok(self.help()),
        }
        to_json(self.controller.layouts())
    }

    fn help(&self) -> String {
        let mut lines = vec![
            "commands: spawn <kind> | close [id] | focus <id> | key <combo> | resize <w> <h> | layout | tiles | clear".to_string(),
            format!(
                "kinds: {}",
                TileKind::ALL.map(|k| k.as_str()).join(", ")
            ),
        ];
        for action in Action::bindable_actions() {
            let binding = self
                .registry
                .keybind_for_action(&action)
                .unwrap_or_else(|| "unbound".into());
            lines.push(format!("{binding}: {}", action.label()));
        }
        lines.join("\n")
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FolioError> {
    serde_json::to_string(value).map_err(|e| FolioError::Other(format!("serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::{KeybindConfig, SplitPolicy, TilingConfig};

    fn driver() -> Driver {
        let controller = WindowController::new(
            TilingConfig {
                split_policy: SplitPolicy::Horizontal,
                ..Default::default()
            },
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        );
        Driver::new(controller, KeybindRegistry::from_config(&KeybindConfig::default()))
    }

    fn layouts(json: &str) -> Vec<serde_json::Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!("spawn home".parse::<Command>().unwrap(), Command::Spawn(TileKind::Home));
        assert_eq!("close".parse::<Command>().unwrap(), Command::Close(None));
        assert_eq!(
            "close home-1".parse::<Command>().unwrap(),
            Command::Close(Some(TileId::from("home-1")))
        );
        assert_eq!(
            "resize 640 480".parse::<Command>().unwrap(),
            Command::Resize {
                width: 640.0,
                height: 480.0
            }
        );
        assert_eq!("key Cmd+W".parse::<Command>().unwrap(), Command::Key("Cmd+W".into()));
    }

    #[test]
    fn rejects_bad_commands() {
        assert!("spawn desktop".parse::<Command>().is_err());
        assert!("resize 10".parse::<Command>().is_err());
        assert!("resize -1 10".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("focus".parse::<Command>().is_err());
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let mut d = driver();
        assert_eq!(d.run_line("   ").unwrap(), None);
        assert_eq!(d.run_line("# setup").unwrap(), None);
    }

    #[test]
    fn spawn_prints_layout_json() {
        let mut d = driver();
        let out = d.run_line("spawn home").unwrap().unwrap();
        let list = layouts(&out);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["tile"]["kind"], "home");
        assert_eq!(list[0]["rect"]["width"], 992.0);

        let out = d.run_line("spawn projects").unwrap().unwrap();
        let list = layouts(&out);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["rect"]["x"], 504.0);
        assert_eq!(list[1]["tile"]["focused"], true);
    }

    #[test]
    fn key_commands_drive_controller() {
        let mut d = driver();
        d.run_line("key Cmd+N").unwrap();
        d.run_line("key Cmd+N").unwrap();
        assert_eq!(d.controller().tile_count(), 2);
        d.run_line("key Cmd+W").unwrap();
        assert_eq!(d.controller().tile_count(), 1);
        assert!(d.run_line("key Hyper+W").is_err());
    }

    #[test]
    fn close_without_focus_errors() {
        let mut d = driver();
        assert!(d.run_line("close").is_err());
        assert!(d.run_line("close ghost").is_err());
    }

    #[test]
    fn resize_and_tiles() {
        let mut d = driver();
        d.run_line("spawn about").unwrap();
        let out = d.run_line("resize 200 100").unwrap().unwrap();
        assert_eq!(layouts(&out)[0]["rect"]["width"], 192.0);

        let out = d.run_line("tiles").unwrap().unwrap();
        let tiles: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(tiles[0]["title"], "About");
    }

    #[test]
    fn help_lists_bindings() {
        let mut d = driver();
        let out = d.run_line("help").unwrap().unwrap();
        assert!(out.contains("Close Tile"));
        assert!(out.contains("Focus Tile 5"));
        assert!(out.contains("projects"));
    }
}
