pub mod text;
pub mod token;

pub use text::Text;
pub use token::{TokenContext, Tokens};
