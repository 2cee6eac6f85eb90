use std::str::FromStr;

use thiserror::Error;

use crate::controllers::viewport::{NavigationEvent, ZoomDirection};
use crate::core::data::complex::Complex;
use crate::core::data::view_rect::ViewRect;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationStepError {
    #[error("expected KIND:VALUES (rect, zoom or pan) or 'reset', got '{0}'")]
    MissingKind(String),
    #[error("unknown navigation step '{0}', expected rect, zoom, pan or reset")]
    UnknownKind(String),
    #[error("'{kind}' takes {expected} comma-separated values, got '{values}'")]
    WrongArity {
        kind: &'static str,
        expected: usize,
        values: String,
    },
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("zoom direction must be 'in' or 'out', got '{0}'")]
    InvalidDirection(String),
}

/// A scripted gesture for headless rendering.
///
/// Parsed from `rect:RE1,IM1,RE2,IM2`, `zoom:RE,IM,in|out`, `pan:DX,DY`
/// (moves the view by `(DX, DY)`) or a bare `reset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationStep {
    Rect { start: Complex, end: Complex },
    Zoom { anchor: Complex, direction: ZoomDirection },
    Pan { dx: f64, dy: f64 },
    Reset,
}

impl NavigationStep {
    /// The events a user would produce for this gesture over `view`.
    #[must_use]
    pub fn to_events(&self, view: ViewRect) -> Vec<NavigationEvent> {
        match *self {
            Self::Rect { start, end } => vec![NavigationEvent::RectangleSelected {
                start: Some(start),
                end: Some(end),
            }],
            Self::Zoom { anchor, direction } => vec![NavigationEvent::ScrollZoom {
                anchor: Some(anchor),
                direction,
            }],
            Self::Pan { dx, dy } => {
                // Dragging the content by (-dx, -dy) moves the view by (dx, dy).
                let grab = view.center();
                let release = Complex::new(grab.real - dx, grab.imag - dy);

                vec![
                    NavigationEvent::PanStart { anchor: Some(grab) },
                    NavigationEvent::PanMove {
                        current: Some(release),
                    },
                    NavigationEvent::PanEnd,
                ]
            }
            Self::Reset => vec![NavigationEvent::Reset],
        }
    }
}

impl FromStr for NavigationStep {
    type Err = NavigationStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "reset" {
            return Ok(Self::Reset);
        }

        let (kind, values) = s
            .split_once(':')
            .ok_or_else(|| NavigationStepError::MissingKind(s.to_string()))?;
        let parts: Vec<&str> = values.split(',').map(str::trim).collect();

        match kind.trim() {
            "rect" => {
                let [re1, im1, re2, im2] = numbers::<4>("rect", values, &parts)?;
                Ok(Self::Rect {
                    start: Complex::new(re1, im1),
                    end: Complex::new(re2, im2),
                })
            }
            "zoom" => {
                let (direction, coords) = parts
                    .split_last()
                    .filter(|_| parts.len() == 3)
                    .ok_or_else(|| NavigationStepError::WrongArity {
                        kind: "zoom",
                        expected: 3,
                        values: values.to_string(),
                    })?;
                let [real, imag] = numbers::<2>("zoom", values, coords)?;
                let direction = match *direction {
                    "in" => ZoomDirection::In,
                    "out" => ZoomDirection::Out,
                    other => return Err(NavigationStepError::InvalidDirection(other.to_string())),
                };
                Ok(Self::Zoom {
                    anchor: Complex::new(real, imag),
                    direction,
                })
            }
            "pan" => {
                let [dx, dy] = numbers::<2>("pan", values, &parts)?;
                Ok(Self::Pan { dx, dy })
            }
            other => Err(NavigationStepError::UnknownKind(other.to_string())),
        }
    }
}

fn numbers<const N: usize>(
    kind: &'static str,
    values: &str,
    parts: &[&str],
) -> Result<[f64; N], NavigationStepError> {
    if parts.len() != N {
        return Err(NavigationStepError::WrongArity {
            kind,
            expected: N,
            values: values.to_string(),
        });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| NavigationStepError::InvalidNumber((*part).to_string()))?;
    }

    Ok(out)
}
