pub mod b2b_service;
pub mod blog_service;
pub mod contact_service;
pub mod course_service;
pub mod documentation_service;
pub mod lucky_draw_service;
pub mod newsletter_service;
pub mod process_step_service;
pub mod testimonial_service;
pub mod university_service;
pub mod user_service;

pub use b2b_service::*;
pub use blog_service::*;
pub use contact_service::*;
pub use course_service::*;
pub use documentation_service::*;
pub use lucky_draw_service::*;
pub use newsletter_service::*;
pub use process_step_service::*;
pub use testimonial_service::*;
pub use university_service::*;
pub use user_service::*;

use crate::config::LuckyDrawConfig;
use actix_web::web;
use sea_orm::DatabaseConnection;

/// 所有业务服务，启动时创建一次，每个 worker 注册为 `web::Data`
#[derive(Clone)]
pub struct AppServices {
    pub lucky_draw: LuckyDrawService,
    pub contact: ContactService,
    pub b2b: B2bService,
    pub newsletter: NewsletterService,
    pub university: UniversityService,
    pub course: CourseService,
    pub blog: BlogService,
    pub testimonial: TestimonialService,
    pub process_step: ProcessStepService,
    pub documentation: DocumentationService,
    pub user: UserService,
}

impl AppServices {
    pub fn new(pool: DatabaseConnection, lucky_draw: LuckyDrawConfig) -> Self {
        Self {
            lucky_draw: LuckyDrawService::new(pool.clone(), lucky_draw),
            contact: ContactService::new(pool.clone()),
            b2b: B2bService::new(pool.clone()),
            newsletter: NewsletterService::new(pool.clone()),
            university: UniversityService::new(pool.clone()),
            course: CourseService::new(pool.clone()),
            blog: BlogService::new(pool.clone()),
            testimonial: TestimonialService::new(pool.clone()),
            process_step: ProcessStepService::new(pool.clone()),
            documentation: DocumentationService::new(pool.clone()),
            user: UserService::new(pool),
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.lucky_draw.clone()))
            .app_data(web::Data::new(self.contact.clone()))
            .app_data(web::Data::new(self.b2b.clone()))
            .app_data(web::Data::new(self.newsletter.clone()))
            .app_data(web::Data::new(self.university.clone()))
            .app_data(web::Data::new(self.course.clone()))
            .app_data(web::Data::new(self.blog.clone()))
            .app_data(web::Data::new(self.testimonial.clone()))
            .app_data(web::Data::new(self.process_step.clone()))
            .app_data(web::Data::new(self.documentation.clone()))
            .app_data(web::Data::new(self.user.clone()));
    }
}
