use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::ExplorerConfig;
use crate::core::errors::configuration::InvalidConfiguration;
use crate::input::cli::navigation_step::NavigationStep;

/// View, raster and zoom settings shared by every front end.
#[derive(Debug, Clone, PartialEq, Args)]
pub struct SessionArgs {
    /// Lower bound of the real axis
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub re_min: f64,
    /// Upper bound of the real axis
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub re_max: f64,
    /// Lower bound of the imaginary axis
    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    pub im_min: f64,
    /// Upper bound of the imaginary axis
    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    pub im_max: f64,
    /// Raster width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Raster height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
    /// Iterations before a point is treated as inside the set
    #[arg(long, default_value_t = 200)]
    pub max_iterations: u32,
    /// Extent multiplier for one zoom-in step
    #[arg(long, default_value_t = 0.9)]
    pub zoom_in: f64,
    /// Extent multiplier for one zoom-out step
    #[arg(long, default_value_t = 1.1)]
    pub zoom_out: f64,
}

impl SessionArgs {
    pub fn to_config(&self) -> Result<ExplorerConfig, InvalidConfiguration> {
        ExplorerConfig::new(
            self.re_min,
            self.re_max,
            self.im_min,
            self.im_max,
            self.width,
            self.height,
            self.max_iterations,
            self.zoom_in,
            self.zoom_out,
        )
    }
}

/// Render the Mandelbrot set to a PPM image, optionally after scripted navigation.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version)]
pub struct RenderArgs {
    #[command(flatten)]
    pub session: SessionArgs,
    /// Where to write the final frame
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
    /// Navigation applied in order before writing: rect:RE1,IM1,RE2,IM2,
    /// zoom:RE,IM,in|out, pan:DX,DY or reset
    #[arg(long = "step", value_name = "KIND:VALUES", allow_hyphen_values = true)]
    pub steps: Vec<NavigationStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::ZoomDirection;
    use crate::core::data::complex::Complex;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        RenderArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_give_default_config() {
        let args = RenderArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();

        assert_eq!(args.session.to_config().unwrap(), ExplorerConfig::default());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
        assert!(args.steps.is_empty());
    }

    #[test]
    fn test_negative_bounds_and_steps() {
        let args = RenderArgs::try_parse_from([
            "mandelbrot_explorer",
            "--re-min",
            "-0.8",
            "--re-max",
            "-0.7",
            "--im-min",
            "0.05",
            "--im-max",
            "0.15",
            "--step",
            "zoom:-0.75,0.1,in",
            "--step",
            "pan:-0.01,0",
            "-o",
            "out.ppm",
        ])
        .unwrap();

        let config = args.session.to_config().unwrap();
        assert_eq!(config.view.re_min(), -0.8);
        assert_eq!(config.view.im_max(), 0.15);
        assert_eq!(
            args.steps,
            vec![
                NavigationStep::Zoom {
                    anchor: Complex::new(-0.75, 0.1),
                    direction: ZoomDirection::In
                },
                NavigationStep::Pan { dx: -0.01, dy: 0.0 },
            ]
        );
        assert_eq!(args.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_invalid_step_is_a_parse_error() {
        let result = RenderArgs::try_parse_from(["mandelbrot_explorer", "--step", "spin:1,2"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_zero_width_fails_validation() {
        let args = RenderArgs::try_parse_from(["mandelbrot_explorer", "--width", "0"]).unwrap();

        assert_eq!(
            args.session.to_config(),
            Err(InvalidConfiguration::ZeroRasterSize { width: 0, height: 800 })
        );
    }
}
