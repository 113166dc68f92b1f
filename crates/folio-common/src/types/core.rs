use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kinds of region a tile can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Home,
    About,
    Projects,
    Articles,
    Contact,
    Terminal,
}

impl TileKind {
    pub const ALL: [TileKind; 6] = [
        TileKind::Home,
        TileKind::About,
        TileKind::Projects,
        TileKind::Articles,
        TileKind::Contact,
        TileKind::Terminal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Home => "home",
            TileKind::About => "about",
            TileKind::Projects => "projects",
            TileKind::Articles => "articles",
            TileKind::Contact => "contact",
            TileKind::Terminal => "terminal",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            TileKind::Home => "Home",
            TileKind::About => "About",
            TileKind::Projects => "Projects",
            TileKind::Articles => "Articles",
            TileKind::Contact => "Contact",
            TileKind::Terminal => "Terminal",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        TileKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| format!("unknown tile kind: {s}"))
    }
}
