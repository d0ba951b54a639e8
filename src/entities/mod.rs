pub mod b2b_submissions;
pub mod blogs;
pub mod contact_submissions;
pub mod courses;
pub mod documentations;
pub mod lucky_draw_entries;
pub mod newsletters;
pub mod process_steps;
pub mod testimonials;
pub mod universities;
pub mod users;

pub use b2b_submissions as b2b_submission_entity;
pub use blogs as blog_entity;
pub use contact_submissions as contact_submission_entity;
pub use courses as course_entity;
pub use documentations as documentation_entity;
pub use lucky_draw_entries as lucky_draw_entry_entity;
pub use newsletters as newsletter_entity;
pub use process_steps as process_step_entity;
pub use testimonials as testimonial_entity;
pub use universities as university_entity;
pub use users::UserRole;
pub use users as user_entity;
