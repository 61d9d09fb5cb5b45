pub mod base;
pub mod button;
pub mod canvas;
pub mod text;

pub use base::Widget;
pub use button::Button;
pub use canvas::Canvas;
pub use text::Text;
