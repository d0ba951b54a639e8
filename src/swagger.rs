use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::UserRole;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::lucky_draw::enter,
        handlers::lucky_draw::run_draw,
        handlers::lucky_draw::list_entries,
        handlers::lucky_draw::mark_notified,
        handlers::lucky_draw::stats,
        handlers::contact::create_contact,
        handlers::contact::list_contacts,
        handlers::contact::get_contact,
        handlers::contact::set_contact_processed,
        handlers::b2b::create_b2b,
        handlers::b2b::list_b2b,
        handlers::b2b::set_b2b_processed,
        handlers::newsletter::subscribe,
        handlers::newsletter::unsubscribe,
        handlers::newsletter::list_subscribers,
        handlers::university::list_universities,
        handlers::university::get_university,
        handlers::university::create_university,
        handlers::university::update_university,
        handlers::university::delete_university,
        handlers::course::list_courses,
        handlers::course::get_course,
        handlers::course::create_course,
        handlers::course::update_course,
        handlers::course::delete_course,
        handlers::blog::list_blogs,
        handlers::blog::get_blog,
        handlers::blog::create_blog,
        handlers::blog::update_blog,
        handlers::blog::delete_blog,
        handlers::testimonial::list_testimonials,
        handlers::testimonial::create_testimonial,
        handlers::testimonial::update_testimonial,
        handlers::testimonial::delete_testimonial,
        handlers::process_step::list_steps,
        handlers::process_step::create_step,
        handlers::process_step::update_step,
        handlers::process_step::delete_step,
        handlers::documentation::list_documentation,
        handlers::documentation::create_documentation,
        handlers::documentation::update_documentation,
        handlers::documentation::delete_documentation,
        handlers::admin::list_users,
        handlers::admin::create_user,
        handlers::admin::delete_user,
    ),
    components(
        schemas(
            ApiError,
            CreatedResponse,
            UpdateProcessedRequest,
            EnterLuckyDrawRequest,
            EnterLuckyDrawResponse,
            RunDrawRequest,
            RunDrawResponse,
            LuckyDrawEntryResponse,
            LuckyDrawStatsResponse,
            CreateContactRequest,
            ContactSubmissionResponse,
            CreateB2bRequest,
            B2bSubmissionResponse,
            NewsletterRequest,
            NewsletterResponse,
            UniversityRequest,
            UniversityResponse,
            UniversityDetailResponse,
            CourseSummary,
            CourseRequest,
            CourseResponse,
            BlogRequest,
            BlogResponse,
            TestimonialRequest,
            TestimonialResponse,
            ProcessStepRequest,
            ProcessStepResponse,
            DocumentationRequest,
            DocumentationResponse,
            CreateUserRequest,
            UserResponse,
            UserRole,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "lucky_draw", description = "Lucky draw entries and draws"),
        (name = "contact", description = "Student enquiry leads"),
        (name = "b2b", description = "Partnership enquiries"),
        (name = "newsletter", description = "Newsletter subscriptions"),
        (name = "university", description = "Partner universities"),
        (name = "course", description = "Courses offered by universities"),
        (name = "blog", description = "Blog posts"),
        (name = "testimonial", description = "Student testimonials"),
        (name = "process_step", description = "Application process steps"),
        (name = "documentation", description = "Required documents checklist"),
        (name = "admin", description = "Back-office accounts"),
    ),
    info(
        title = "Study Abroad Backend API",
        version = "1.0.0",
        description = "Study abroad consultancy REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_lucky_draw_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/luckydraw/enter"));
        assert!(doc.paths.paths.contains_key("/luckydraw/run"));
        assert!(doc.paths.paths.contains_key("/blogs/{slug}"));
    }
}
