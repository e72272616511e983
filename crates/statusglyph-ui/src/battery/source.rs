use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;

use crate::error::DemoCommandError;

use super::state::{plug, BatteryLevel, BatteryState};

/// Demo-mode command, already parsed from its string payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCommand {
    Enter,
    Exit,
    Battery { level: Option<u8>, plugged: Option<bool> },
}

impl DemoCommand {
    /// Parses a command selector and its key/value payload.
    ///
    /// `level` is clamped to `0..=100`; `plugged` accepts `true`/`false` in
    /// any case. Malformed values are rejected without side effects.
    pub fn parse(command: &str, args: &HashMap<String, String>) -> Result<Self, DemoCommandError> {
        match command {
            "enter" => Ok(DemoCommand::Enter),
            "exit" => Ok(DemoCommand::Exit),
            "battery" => {
                let level = args
                    .get("level")
                    .map(|raw| {
                        raw.trim()
                            .parse::<i64>()
                            .map(|v| v.clamp(0, 100) as u8)
                            .map_err(|_| DemoCommandError::InvalidLevel(raw.clone()))
                    })
                    .transpose()?;
                let plugged = args
                    .get("plugged")
                    .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                        "true" => Ok(true),
                        "false" => Ok(false),
                        _ => Err(DemoCommandError::InvalidPlugged(raw.clone())),
                    })
                    .transpose()?;
                Ok(DemoCommand::Battery { level, plugged })
            }
            other => Err(DemoCommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Where the meter reads its battery state from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSource {
    #[default]
    Live,
    Demo { level: BatteryLevel, plugged: bool },
}

impl LevelSource {
    #[inline]
    pub fn is_demo(&self) -> bool {
        matches!(self, LevelSource::Demo { .. })
    }

    /// Applies a demo command. Returns `true` when the displayed state may
    /// have changed and a redraw is due.
    ///
    /// Commands that do not fit the current mode (`exit` while live,
    /// `battery` while live, `enter` twice) are ignored.
    pub fn dispatch(&mut self, cmd: DemoCommand, live: &BatteryState) -> bool {
        match (*self, cmd) {
            (LevelSource::Live, DemoCommand::Enter) => {
                debug!("demo mode entered at {:?}", live.level);
                *self = LevelSource::Demo { level: live.level, plugged: live.plugged };
                false
            }
            (LevelSource::Demo { .. }, DemoCommand::Exit) => {
                debug!("demo mode exited");
                *self = LevelSource::Live;
                true
            }
            (LevelSource::Demo { level, plugged }, DemoCommand::Battery { level: new_level, plugged: new_plugged }) => {
                *self = LevelSource::Demo {
                    level: new_level.map_or(level, BatteryLevel::Known),
                    plugged: new_plugged.unwrap_or(plugged),
                };
                true
            }
            _ => false,
        }
    }

    /// State the renderer should draw.
    ///
    /// Demo state carries only level and plug; status stays unknown, so demo
    /// mode never shows charging indication.
    pub fn resolve<'a>(&self, live: &'a BatteryState) -> Cow<'a, BatteryState> {
        match *self {
            LevelSource::Live => Cow::Borrowed(live),
            LevelSource::Demo { level, plugged } => Cow::Owned(BatteryState {
                level,
                plugged,
                plug_type: if plugged { plug::AC } else { 0 },
                ..Default::default()
            }),
        }
    }
}
