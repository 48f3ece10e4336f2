pub mod export;
pub mod find;

pub use find::find;
