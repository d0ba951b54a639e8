//! 各类表单共用的字段校验

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    // local@domain.tld
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// 收集为空的必填字段，一次性在错误信息中全部列出
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// `value` 缺失或只有空白时记为缺失
    pub fn check(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.map(str::trim).is_none_or(str::is_empty) {
            self.missing.push(name);
        }
        self
    }

    pub fn finish(self) -> AppResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

/// 校验邮箱格式，返回小写、去空格后的邮箱
pub fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    if !email_regex().is_match(&email) {
        return Err(AppError::ValidationError(
            "Invalid email address".to_string(),
        ));
    }
    Ok(email)
}

/// 校验手机号：去掉格式字符后需为 7-15 位数字，可带前导 +
pub fn normalize_phone(phone: &str) -> AppResult<String> {
    let trimmed = phone.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.'));

    if !allowed || digits.len() < 7 || digits.len() > 15 {
        return Err(AppError::ValidationError(
            "Invalid phone number".to_string(),
        ));
    }

    if trimmed.starts_with('+') {
        Ok(format!("+{digits}"))
    } else {
        Ok(digits)
    }
}

/// 去掉首尾空白，空字符串视为 `None`
pub fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 去掉首尾空白（字段已由 [`RequiredFields`] 校验过）
pub fn clean_required(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// 生成小写、仅含 ASCII、以连字符分隔的 slug
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// 校验传入的 slug，未传则由 `fallback` 生成
pub fn resolve_slug(slug: Option<&str>, fallback: &str) -> AppResult<String> {
    let source = match slug.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => fallback,
    };
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(AppError::ValidationError(
            "Slug must contain at least one letter or digit".to_string(),
        ));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_lists_every_missing_field() {
        let err = RequiredFields::new()
            .check("name", Some("Asha"))
            .check("email", None)
            .check("phone", Some("   "))
            .finish()
            .unwrap_err();
        match err {
            AppError::ValidationError(msg) => {
                assert_eq!(msg, "Missing required fields: email, phone")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_required_fields_ok() {
        assert!(
            RequiredFields::new()
                .check("name", Some("Asha"))
                .finish()
                .is_ok()
        );
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Asha@Example.COM ").unwrap(),
            "asha@example.com"
        );
        assert!(normalize_email("asha@example").is_err());
        assert!(normalize_email("asha.example.com").is_err());
        assert!(normalize_email("as ha@example.com").is_err());
        assert!(normalize_email("@example.com").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+977 980-1234567").unwrap(), "+9779801234567");
        assert_eq!(normalize_phone("(02) 9876 5432").unwrap(), "0298765432");
        assert!(normalize_phone("12345").is_err());
        assert!(normalize_phone("98012abc34").is_err());
        assert!(normalize_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Study in Australia: 2026 Guide!"), "study-in-australia-2026-guide");
        assert_eq!(slugify("  --Hello   World--  "), "hello-world");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_resolve_slug() {
        assert_eq!(resolve_slug(None, "IELTS Tips").unwrap(), "ielts-tips");
        assert_eq!(resolve_slug(Some("Custom Slug"), "ignored").unwrap(), "custom-slug");
        assert_eq!(resolve_slug(Some("  "), "Fallback").unwrap(), "fallback");
        assert!(resolve_slug(None, "!!!").is_err());
    }

    #[test]
    fn test_clean_optional() {
        assert_eq!(clean_optional(Some("  x ".into())), Some("x".into()));
        assert_eq!(clean_optional(Some("   ".into())), None);
        assert_eq!(clean_optional(None), None);
    }
}
