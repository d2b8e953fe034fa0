pub mod app;
pub mod input;
pub mod line_input;
pub mod modal;
pub mod render;
pub mod row;
pub mod theme;

pub use app::run;
