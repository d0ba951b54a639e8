use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition};

const LIKE_ESCAPE: char = '\\';

/// 构造 `LOWER(table.col) LIKE '%term%'`，多列之间 OR 连接
/// 列名带表名前缀，联表查询时不会产生歧义
///
/// 关键词为空时返回 `None`，调用方直接跳过过滤
pub fn contains_any<C>(columns: &[C], term: Option<&str>) -> Option<Condition>
where
    C: ColumnTrait,
{
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    let condition = columns.iter().fold(Condition::any(), |cond, col| {
        let lowered = Func::lower(Expr::col((col.entity_name(), *col)));
        cond.add(Expr::expr(lowered).like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)))
    });
    Some(condition)
}

// 转义 LIKE 通配符，按字面匹配用户输入
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::lucky_draw_entry_entity as entries;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[test]
    fn test_blank_term_skips_filter() {
        assert!(contains_any(&[entries::Column::Name], None).is_none());
        assert!(contains_any(&[entries::Column::Name], Some("   ")).is_none());
    }

    #[test]
    fn test_builds_case_insensitive_or_filter() {
        let cond = contains_any(
            &[entries::Column::Name, entries::Column::Email],
            Some("AsHa"),
        )
        .unwrap();
        let sql = entries::Entity::find()
            .filter(cond)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("lucky_draw_entries"."name") LIKE '%asha%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("lucky_draw_entries"."email") LIKE '%asha%'"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_escaped_pattern_uses_escape_clause() {
        let cond = contains_any(&[entries::Column::Email], Some("Asha_K@")).unwrap();
        let sql = entries::Entity::find()
            .filter(cond)
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r"LIKE '%asha\_k@%' ESCAPE '\'"), "{sql}");
    }
}
