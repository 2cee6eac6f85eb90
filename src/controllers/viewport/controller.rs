use crate::controllers::viewport::drag_state::DragState;
use crate::controllers::viewport::events::{NavigationEvent, ZoomDirection};
use crate::controllers::viewport::zoom_factors::ZoomFactors;
use crate::core::data::complex::Complex;
use crate::core::data::view_rect::ViewRect;
use crate::core::errors::navigation::NavigationError;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    view: ViewRect,
    initial_view: ViewRect,
    zoom_factors: ZoomFactors,
    pan: Option<DragState>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewRect::default(), ZoomFactors::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(view: ViewRect, zoom_factors: ZoomFactors) -> Self {
        Self {
            view,
            initial_view: view,
            zoom_factors,
            pan: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.view
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// The active pan, if a drag is in progress.
    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.pan.as_ref()
    }

    /// Replaces the view with the bounding box of two selected corners.
    ///
    /// Both corners must lie within the current view and span a non-empty box.
    pub fn zoom_to_rectangle(&mut self, p1: Complex, p2: Complex) -> Result<ViewRect, NavigationError> {
        if !self.view.contains_point(p1) || !self.view.contains_point(p2) {
            return Err(NavigationError::DegenerateSelection);
        }

        let view = ViewRect::from_corners(p1, p2).map_err(|_| NavigationError::DegenerateSelection)?;

        Ok(self.replace_view(view))
    }

    /// Rescales the view so that `anchor` keeps its relative position.
    ///
    /// Anchors outside the view are allowed; the view then grows or shrinks
    /// towards a point beyond its edge.
    pub fn zoom_at_point(
        &mut self,
        anchor: Complex,
        direction: ZoomDirection,
    ) -> Result<ViewRect, NavigationError> {
        let factor = self.zoom_factors.factor(direction);
        let view = self
            .view
            .scaled_about(anchor, factor)
            .map_err(|_| NavigationError::DegenerateSelection)?;

        Ok(self.replace_view(view))
    }

    #[must_use]
    pub fn begin_pan(&self, anchor: Complex) -> DragState {
        DragState::new(anchor, self.view)
    }

    /// Moves the pan's starting view so the anchor follows the pointer to `current`.
    ///
    /// Always computed from the snapshot in `state`, so repeated calls never accumulate error.
    pub fn update_pan(&mut self, state: &DragState, current: Complex) -> Result<ViewRect, NavigationError> {
        let dx = current.real - state.anchor().real;
        let dy = current.imag - state.anchor().imag;

        let view = state
            .anchor_view()
            .translated(-dx, -dy)
            .map_err(|_| NavigationError::DegenerateSelection)?;

        Ok(self.replace_view(view))
    }

    pub fn end_pan(&mut self, state: DragState) {
        debug!("pan ended, anchor was {:?}", state.anchor());
    }

    /// Restores the view the controller was created with, ending any pan.
    pub fn reset(&mut self) -> ViewRect {
        if let Some(state) = self.pan.take() {
            self.end_pan(state);
        }

        self.replace_view(self.initial_view)
    }

    /// Applies one navigation event.
    ///
    /// Returns the new view when the event changed it; rejected and ignored
    /// events return `None` and leave the view as it was.
    pub fn handle(&mut self, event: NavigationEvent) -> Option<ViewRect> {
        let before = self.view;

        let result = match event {
            NavigationEvent::RectangleSelected { start, end } => match (start, end) {
                (Some(p1), Some(p2)) => self.zoom_to_rectangle(p1, p2).map(Some),
                _ => Err(NavigationError::OutOfBoundsPointer),
            },
            NavigationEvent::ScrollZoom { anchor, direction } => anchor
                .ok_or(NavigationError::OutOfBoundsPointer)
                .and_then(|anchor| self.zoom_at_point(anchor, direction))
                .map(Some),
            NavigationEvent::PanStart { anchor } => match anchor {
                Some(anchor) => {
                    self.pan = Some(self.begin_pan(anchor));
                    Ok(None)
                }
                None => Err(NavigationError::OutOfBoundsPointer),
            },
            NavigationEvent::PanMove { current } => match (self.pan, current) {
                (None, _) => Ok(None),
                (Some(_), None) => Err(NavigationError::OutOfBoundsPointer),
                (Some(state), Some(current)) => self.update_pan(&state, current).map(Some),
            },
            NavigationEvent::PanEnd => {
                if let Some(state) = self.pan.take() {
                    self.end_pan(state);
                }
                Ok(None)
            }
            NavigationEvent::Reset => {
                let view = self.reset();
                Ok((view != before).then_some(view))
            }
        };

        match result {
            Ok(Some(view))
                if matches!(
                    event,
                    NavigationEvent::RectangleSelected { .. } | NavigationEvent::ScrollZoom { .. }
                ) =>
            {
                self.rebase_pan(before);
                Some(view)
            }
            Ok(view) => view,
            Err(err) => {
                debug!("ignoring {event:?}: {err}");
                None
            }
        }
    }

    /// A zoom during a drag restarts the drag against the zoomed view. The
    /// anchor keeps its relative position, so it stays under the pointer.
    fn rebase_pan(&mut self, previous: ViewRect) {
        if let Some(state) = self.pan {
            let anchor = self.view.point_at(previous.relative_position(state.anchor()));
            self.pan = Some(self.begin_pan(anchor));
        }
    }

    fn replace_view(&mut self, view: ViewRect) -> ViewRect {
        debug!("view changed to re [{}, {}], im [{}, {}]", view.re_min(), view.re_max(), view.im_min(), view.im_max());
        self.view = view;
        view
    }
}
