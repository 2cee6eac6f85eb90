pub mod axis_samples;
