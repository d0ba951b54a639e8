pub mod admin;
pub mod b2b;
pub mod blog;
pub mod contact;
pub mod course;
pub mod documentation;
pub mod lucky_draw;
pub mod newsletter;
pub mod process_step;
pub mod testimonial;
pub mod university;

pub use admin::admin_config;
pub use b2b::b2b_config;
pub use blog::blog_config;
pub use contact::contact_config;
pub use course::course_config;
pub use documentation::documentation_config;
pub use lucky_draw::lucky_draw_config;
pub use newsletter::newsletter_config;
pub use process_step::process_step_config;
pub use testimonial::testimonial_config;
pub use university::university_config;

use crate::error::AppError;
use actix_web::web;

// 请求体 / 查询参数 / 路径解析失败统一返回 400 错误信封
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {err}")).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid query parameters: {err}")).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid path parameter: {err}")).into()
    })
}

/// 挂载在 `/api/v1` 下的全部路由
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .configure(lucky_draw_config)
        .configure(contact_config)
        .configure(b2b_config)
        .configure(newsletter_config)
        .configure(university_config)
        .configure(course_config)
        .configure(blog_config)
        .configure(testimonial_config)
        .configure(process_step_config)
        .configure(documentation_config)
        .configure(admin_config);
}
