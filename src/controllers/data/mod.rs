pub mod rendered_frame;
