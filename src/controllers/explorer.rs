//! An exploration session: navigation followed by a synchronous re-render.
//!
//! Every event is fully handled, rendered and presented before the next one
//! is accepted, so a session needs no locking.

use std::time::Instant;

use log::info;

use crate::config::ExplorerConfig;
use crate::controllers::data::rendered_frame::RenderedFrame;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::controllers::viewport::{NavigationEvent, ViewportController};
use crate::core::actions::render::render_escape_grid::render;
use crate::core::data::raster_spec::RasterSpec;
use crate::core::data::view_rect::ViewRect;

#[derive(Debug)]
pub struct Explorer<P: FramePresenterPort> {
    controller: ViewportController,
    raster: RasterSpec,
    presenter: P,
}

impl<P: FramePresenterPort> Explorer<P> {
    pub fn new(config: ExplorerConfig, presenter: P) -> Self {
        Self {
            controller: ViewportController::new(config.view, config.zoom),
            raster: config.raster,
            presenter,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.controller.view()
    }

    #[must_use]
    pub fn raster(&self) -> RasterSpec {
        self.raster
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Renders the current view and hands the frame to the presenter.
    pub fn render(&mut self) -> Result<(), P::Failure> {
        let view = self.controller.view();

        let start = Instant::now();
        let grid = render(view, self.raster);
        let render_duration = start.elapsed();

        info!(
            "rendered {}x{} ({} iterations) in {:?}",
            self.raster.width(),
            self.raster.height(),
            self.raster.max_iterations(),
            render_duration
        );

        self.presenter.present(RenderedFrame {
            view,
            grid,
            render_duration,
        })
    }

    /// Applies a navigation event, re-rendering only when the view changed.
    ///
    /// Returns whether a new frame was presented.
    pub fn handle(&mut self, event: NavigationEvent) -> Result<bool, P::Failure> {
        if self.controller.handle(event).is_none() {
            return Ok(false);
        }

        self.render()?;
        Ok(true)
    }
}
