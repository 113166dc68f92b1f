use folio_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"Cmd+W"` or `"Ctrl+Shift+Left"` into a
/// [`KeyBind`].
///
/// `Cmd`/`Command` is the platform accelerator: `Super` on macOS, `Ctrl`
/// elsewhere. `Option` is `Alt`; `Win`/`Meta` are `Super`. The last token
/// is always the key, even if it spells a modifier name.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    }

    let (key_token, modifier_tokens) = match tokens.split_last() {
        Some((key, mods)) if !key.is_empty() => (*key, mods),
        _ => {
            return Err(PlatformError::InvalidKeybind(format!(
                "keybind has no key component: {s}"
            )))
        }
    };

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" | "mod" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "space" => "Space".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
