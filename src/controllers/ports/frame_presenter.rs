use std::error::Error;

use crate::controllers::data::rendered_frame::RenderedFrame;

/// Receives each rendered frame for colour mapping and output.
pub trait FramePresenterPort {
    type Failure: Error;

    fn present(&mut self, frame: RenderedFrame) -> Result<(), Self::Failure>;
}
