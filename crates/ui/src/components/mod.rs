mod color_picker;
mod session_form;

pub use color_picker::{ColorPicker, PALETTE};
pub use session_form::SessionForm;
