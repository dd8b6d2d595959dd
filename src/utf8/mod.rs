pub mod character;
pub mod digit;
pub mod letter;
pub mod string;
pub mod whitespace;

pub use character::{char, is_char, satisfies};
pub use digit::digit;
pub use letter::letter;
pub use string::is_string;
pub use whitespace::whitespace;
