pub mod clock;
pub mod text;
pub mod words;

pub use clock::Clock;
