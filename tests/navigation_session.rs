use std::convert::Infallible;

use mandelbrot_explorer::{
    Complex, Explorer, ExplorerConfig, FramePresenterPort, NavigationEvent, PointerButton,
    PointerGestures, RasterSpec, RenderedFrame, ScreenMapping, ViewRect, ZoomDirection,
    ZoomFactors,
};

#[derive(Debug, Default)]
struct RecordingPresenter {
    frames: Vec<RenderedFrame>,
}

impl FramePresenterPort for RecordingPresenter {
    type Failure = Infallible;

    fn present(&mut self, frame: RenderedFrame) -> Result<(), Self::Failure> {
        self.frames.push(frame);
        Ok(())
    }
}

fn config() -> ExplorerConfig {
    ExplorerConfig {
        view: ViewRect::default(),
        raster: RasterSpec::new(61, 61, 100).unwrap(),
        zoom: ZoomFactors::reciprocal(0.5).unwrap(),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn zoom_select_pan_and_zoom_back_out() {
    let mut explorer = Explorer::new(config(), RecordingPresenter::default());
    explorer.render().unwrap();

    // Select the upper half of the main cardioid.
    assert!(
        explorer
            .handle(NavigationEvent::RectangleSelected {
                start: Some(Complex::new(-1.0, 0.0)),
                end: Some(Complex::new(0.5, 1.0)),
            })
            .unwrap()
    );
    assert_eq!(explorer.view(), ViewRect::new(-1.0, 0.5, 0.0, 1.0).unwrap());

    // Pan right by a quarter unit.
    explorer
        .handle(NavigationEvent::PanStart {
            anchor: Some(Complex::new(0.0, 0.5)),
        })
        .unwrap();
    explorer
        .handle(NavigationEvent::PanMove {
            current: Some(Complex::new(-0.25, 0.5)),
        })
        .unwrap();
    explorer.handle(NavigationEvent::PanEnd).unwrap();
    let panned = explorer.view();
    assert!(close(panned.re_min(), -0.75));
    assert!(close(panned.re_max(), 0.75));

    // Zooming in and out about the same anchor is exact with reciprocal factors.
    let anchor = Some(Complex::new(0.1, 0.3));
    explorer
        .handle(NavigationEvent::ScrollZoom {
            anchor,
            direction: ZoomDirection::In,
        })
        .unwrap();
    explorer
        .handle(NavigationEvent::ScrollZoom {
            anchor,
            direction: ZoomDirection::Out,
        })
        .unwrap();
    let back = explorer.view();
    assert!(close(back.re_min(), panned.re_min()));
    assert!(close(back.im_max(), panned.im_max()));

    let frames = &explorer.presenter().frames;
    assert_eq!(frames.len(), 5);
    assert!(frames.iter().all(|frame| frame.grid.width() == 61 && frame.grid.height() == 61));
    assert_eq!(frames.last().map(|frame| frame.view), Some(back));
}

#[test]
fn pointer_gestures_drive_a_session() {
    let config = config();
    let mut explorer = Explorer::new(config, RecordingPresenter::default());
    let mut gestures = PointerGestures::new(ScreenMapping::new(&config.raster));

    // Drag the middle third of a 61x61 surface showing [-2, 1] x [-1.5, 1.5].
    gestures.cursor_moved(Some((20.0, 20.0)), explorer.view());
    gestures.button_pressed(PointerButton::Primary, explorer.view());
    gestures.cursor_moved(Some((40.0, 40.0)), explorer.view());
    let event = gestures
        .button_released(PointerButton::Primary, explorer.view())
        .unwrap();

    assert!(explorer.handle(event).unwrap());
    let view = explorer.view();
    assert!(close(view.re_min(), -1.0));
    assert!(close(view.re_max(), 0.0));
    assert!(close(view.im_min(), -0.5));
    assert!(close(view.im_max(), 0.5));

    // A release off the surface is ignored.
    gestures.button_pressed(PointerButton::Primary, explorer.view());
    gestures.cursor_moved(None, explorer.view());
    let event = gestures
        .button_released(PointerButton::Primary, explorer.view())
        .unwrap();

    assert!(!explorer.handle(event).unwrap());
    assert_eq!(explorer.view(), view);
    assert_eq!(explorer.presenter().frames.len(), 1);
}
