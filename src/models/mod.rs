pub mod b2b;
pub mod blog;
pub mod common;
pub mod contact;
pub mod course;
pub mod documentation;
pub mod lucky_draw;
pub mod newsletter;
pub mod pagination;
pub mod process_step;
pub mod testimonial;
pub mod university;
pub mod user;

pub use b2b::*;
pub use blog::*;
pub use common::*;
pub use contact::*;
pub use course::*;
pub use documentation::*;
pub use lucky_draw::*;
pub use newsletter::*;
pub use pagination::*;
pub use process_step::*;
pub use testimonial::*;
pub use university::*;
pub use user::*;
