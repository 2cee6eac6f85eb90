//! Turns raw pointer input into navigation events.
//!
//! Primary-button drags select a zoom rectangle, secondary-button drags pan
//! and wheel ticks zoom about the cursor. Positions are raster pixel
//! coordinates (see [`ScreenMapping`]); `None` means the pointer is off the
//! render surface.

use crate::controllers::viewport::{NavigationEvent, ZoomDirection};
use crate::core::data::complex::Complex;
use crate::core::data::view_rect::ViewRect;
use crate::input::screen_mapping::ScreenMapping;

pub type ScreenPosition = (f64, f64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerGestures {
    mapping: ScreenMapping,
    cursor: Option<ScreenPosition>,
    selection_start: Option<ScreenPosition>,
    selecting: bool,
    panning: bool,
}

impl PointerGestures {
    #[must_use]
    pub fn new(mapping: ScreenMapping) -> Self {
        Self {
            mapping,
            cursor: None,
            selection_start: None,
            selecting: false,
            panning: false,
        }
    }

    /// Corners of the rubber band while a primary drag is in progress.
    #[must_use]
    pub fn selection(&self) -> Option<(ScreenPosition, ScreenPosition)> {
        if !self.selecting {
            return None;
        }

        self.selection_start.zip(self.cursor)
    }

    /// `view` is the rectangle pointer positions are measured against; during
    /// a pan that is the view the pan started from.
    pub fn cursor_moved(
        &mut self,
        position: Option<ScreenPosition>,
        view: ViewRect,
    ) -> Option<NavigationEvent> {
        self.cursor = position;

        self.panning.then(|| NavigationEvent::PanMove {
            current: self.plane(view),
        })
    }

    pub fn button_pressed(&mut self, button: PointerButton, view: ViewRect) -> Option<NavigationEvent> {
        match button {
            PointerButton::Primary => {
                self.selecting = true;
                self.selection_start = self.cursor;
                None
            }
            PointerButton::Secondary => {
                self.panning = true;
                Some(NavigationEvent::PanStart {
                    anchor: self.plane(view),
                })
            }
        }
    }

    pub fn button_released(&mut self, button: PointerButton, view: ViewRect) -> Option<NavigationEvent> {
        match button {
            PointerButton::Primary => {
                if !std::mem::take(&mut self.selecting) {
                    return None;
                }

                let start = self
                    .selection_start
                    .take()
                    .and_then(|(x, y)| self.mapping.to_plane(view, x, y));

                Some(NavigationEvent::RectangleSelected {
                    start,
                    end: self.plane(view),
                })
            }
            PointerButton::Secondary => {
                std::mem::take(&mut self.panning).then_some(NavigationEvent::PanEnd)
            }
        }
    }

    /// One event per wheel movement; positive `delta` scrolls up, which zooms in.
    pub fn scrolled(&mut self, delta: f64, view: ViewRect) -> Option<NavigationEvent> {
        let direction = if delta > 0.0 {
            ZoomDirection::In
        } else if delta < 0.0 {
            ZoomDirection::Out
        } else {
            return None;
        };

        Some(NavigationEvent::ScrollZoom {
            anchor: self.plane(view),
            direction,
        })
    }

    fn plane(&self, view: ViewRect) -> Option<Complex> {
        self.cursor.and_then(|(x, y)| self.mapping.to_plane(view, x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::ViewportController;
    use crate::core::data::raster_spec::RasterSpec;

    fn gestures() -> PointerGestures {
        PointerGestures::new(ScreenMapping::new(&RasterSpec::new(301, 301, 10).unwrap()))
    }

    fn view() -> ViewRect {
        ViewRect::default()
    }

    #[test]
    fn test_primary_drag_selects_rectangle() {
        let mut gestures = gestures();

        gestures.cursor_moved(Some((0.0, 0.0)), view());
        assert_eq!(gestures.button_pressed(PointerButton::Primary, view()), None);
        gestures.cursor_moved(Some((150.0, 150.0)), view());
        assert_eq!(gestures.selection(), Some(((0.0, 0.0), (150.0, 150.0))));

        let event = gestures.button_released(PointerButton::Primary, view());

        assert_eq!(
            event,
            Some(NavigationEvent::RectangleSelected {
                start: Some(Complex::new(-2.0, 1.5)),
                end: Some(Complex::new(-0.5, 0.0)),
            })
        );
        assert_eq!(gestures.selection(), None);
    }

    #[test]
    fn test_release_off_surface_has_no_end() {
        let mut gestures = gestures();

        gestures.cursor_moved(Some((10.0, 10.0)), view());
        gestures.button_pressed(PointerButton::Primary, view());
        gestures.cursor_moved(None, view());

        let event = gestures.button_released(PointerButton::Primary, view());

        assert!(matches!(
            event,
            Some(NavigationEvent::RectangleSelected { start: Some(_), end: None })
        ));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut gestures = gestures();

        gestures.cursor_moved(Some((10.0, 10.0)), view());

        assert_eq!(gestures.button_released(PointerButton::Primary, view()), None);
        assert_eq!(gestures.button_released(PointerButton::Secondary, view()), None);
    }

    #[test]
    fn test_secondary_drag_pans() {
        let mut gestures = gestures();

        gestures.cursor_moved(Some((150.0, 150.0)), view());
        assert_eq!(
            gestures.button_pressed(PointerButton::Secondary, view()),
            Some(NavigationEvent::PanStart {
                anchor: Some(Complex::new(-0.5, 0.0))
            })
        );
        assert_eq!(
            gestures.cursor_moved(Some((225.0, 150.0)), view()),
            Some(NavigationEvent::PanMove {
                current: Some(Complex::new(0.25, 0.0))
            })
        );
        assert_eq!(
            gestures.cursor_moved(None, view()),
            Some(NavigationEvent::PanMove { current: None })
        );
        assert_eq!(
            gestures.button_released(PointerButton::Secondary, view()),
            Some(NavigationEvent::PanEnd)
        );
        assert_eq!(gestures.cursor_moved(Some((0.0, 0.0)), view()), None);
    }

    #[test]
    fn test_scroll_direction() {
        let mut gestures = gestures();
        gestures.cursor_moved(Some((150.0, 150.0)), view());

        assert_eq!(
            gestures.scrolled(1.0, view()),
            Some(NavigationEvent::ScrollZoom {
                anchor: Some(Complex::new(-0.5, 0.0)),
                direction: ZoomDirection::In
            })
        );
        assert!(matches!(
            gestures.scrolled(-3.0, view()),
            Some(NavigationEvent::ScrollZoom {
                direction: ZoomDirection::Out,
                ..
            })
        ));
        assert_eq!(gestures.scrolled(0.0, view()), None);
    }

    #[test]
    fn test_pan_drag_measured_against_snapshot_follows_pointer() {
        let mut gestures = gestures();
        let mut controller = ViewportController::default();
        let pointer_view = |controller: &ViewportController| {
            controller
                .drag_state()
                .map_or(controller.view(), |state| state.anchor_view())
        };

        gestures.cursor_moved(Some((150.0, 150.0)), pointer_view(&controller));
        let start = gestures.button_pressed(PointerButton::Secondary, pointer_view(&controller));
        controller.handle(start.unwrap());

        for x in [160.0, 170.0, 200.0] {
            let event = gestures.cursor_moved(Some((x, 150.0)), pointer_view(&controller));
            controller.handle(event.unwrap());
        }

        // 50 of the 300 pixel steps across 3 units is 0.5 units.
        assert!((controller.view().re_min() - (-2.5)).abs() < 1e-12);
    }
}
