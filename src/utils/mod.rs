pub mod jwt;
pub mod search;
pub mod validation;

pub use jwt::*;
pub use search::contains_any;
pub use validation::*;
