pub mod conversion;
pub mod definition;
pub mod extract;
pub mod translation;

pub use conversion::*;
pub use definition::*;
pub use extract::*;
pub use translation::*;
