pub mod rectangle_outline;
