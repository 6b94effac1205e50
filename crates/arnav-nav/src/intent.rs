//! User intents: the commands a presentation layer can send the observer.

use std::str::FromStr;

use arnav_core::SimConfig;

use crate::{NavError, NavResult, NavigationState};

/// A single movement command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavIntent {
    /// Turn counter-clockwise by one rotation step.
    RotateLeft,
    /// Turn clockwise by one rotation step.
    RotateRight,
    /// Step forward along the current heading.
    MoveForward,
}

/// Step sizes applied by [`NavigationState::apply`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSteps {
    pub rotation_deg: f64,
    pub movement:     f64,
}

impl Default for NavSteps {
    fn default() -> Self {
        Self { rotation_deg: 15.0, movement: 0.000_05 }
    }
}

impl From<&SimConfig> for NavSteps {
    fn from(config: &SimConfig) -> Self {
        Self {
            rotation_deg: config.rotation_step_deg,
            movement:     config.movement_step,
        }
    }
}

impl NavIntent {
    /// Map a keyboard key name to an intent.
    ///
    /// Accepts browser-style arrow names (`ArrowLeft`, `ArrowRight`,
    /// `ArrowUp`) and the WASD letters `a`, `d`, `w`.
    pub fn from_key(key: &str) -> Option<NavIntent> {
        match key {
            "ArrowLeft" | "a" | "A"  => Some(NavIntent::RotateLeft),
            "ArrowRight" | "d" | "D" => Some(NavIntent::RotateRight),
            "ArrowUp" | "w" | "W"    => Some(NavIntent::MoveForward),
            _ => None,
        }
    }

    /// Parse a compact command script such as `"LLFFR"`.
    ///
    /// `L` = rotate left, `R` = rotate right, `F` = move forward (any case);
    /// whitespace and commas are ignored.
    pub fn parse_script(script: &str) -> NavResult<Vec<NavIntent>> {
        script
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c.to_ascii_uppercase() {
                'L' => Ok(NavIntent::RotateLeft),
                'R' => Ok(NavIntent::RotateRight),
                'F' => Ok(NavIntent::MoveForward),
                _   => Err(NavError::UnknownCommand(c.to_string())),
            })
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavIntent::RotateLeft  => "rotate-left",
            NavIntent::RotateRight => "rotate-right",
            NavIntent::MoveForward => "move-forward",
        }
    }
}

impl FromStr for NavIntent {
    type Err = NavError;

    fn from_str(s: &str) -> NavResult<Self> {
        match s.trim() {
            "rotate-left" | "left" => Ok(NavIntent::RotateLeft),
            "rotate-right" | "right" => Ok(NavIntent::RotateRight),
            "move-forward" | "forward" => Ok(NavIntent::MoveForward),
            other => NavIntent::from_key(other)
                .ok_or_else(|| NavError::UnknownCommand(other.to_string())),
        }
    }
}

impl std::fmt::Display for NavIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl NavigationState {
    /// Apply one intent with the given step sizes.
    pub fn apply(self, intent: NavIntent, steps: NavSteps) -> Self {
        match intent {
            NavIntent::RotateLeft  => self.rotate(-steps.rotation_deg),
            NavIntent::RotateRight => self.rotate(steps.rotation_deg),
            NavIntent::MoveForward => self.move_forward(steps.movement),
        }
    }
}
