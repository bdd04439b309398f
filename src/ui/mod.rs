pub mod renderer;

pub use renderer::{ui, ui_with_flash, Flash};
