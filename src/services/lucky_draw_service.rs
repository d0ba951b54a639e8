use crate::config::LuckyDrawConfig;
use crate::entities::lucky_draw_entry_entity as entries;
use crate::error::{AppError, AppResult};
use crate::models::{
    ClientInfo, EnterLuckyDrawRequest, EnterLuckyDrawResponse, LuckyDrawEntryQuery,
    LuckyDrawEntryResponse, LuckyDrawStatsResponse, PaginatedResponse, RunDrawRequest,
    RunDrawResponse,
};
use crate::utils::{
    RequiredFields, clean_optional, clean_required, contains_any, normalize_email,
    normalize_phone,
};
use chrono::Utc;
use rand::Rng;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tokio::sync::Mutex;

const DUPLICATE_ENTRY: &str = "This email has already entered the lucky draw";

/// Picks `count` items uniformly at random without replacement.
///
/// Partial Fisher–Yates over an index array: at step `i` an index is drawn
/// uniformly from the `n - i` positions not yet taken and swapped into slot
/// `i`. Every remaining item has the same chance at every step. Returns
/// `min(count, pool.len())` items in draw order.
pub fn select_winners<T, R>(pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let n = pool.len();
    let k = count.min(n);

    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }

    let mut slots: Vec<Option<T>> = pool.into_iter().map(Some).collect();
    indices[..k]
        .iter()
        .filter_map(|&idx| slots[idx].take())
        .collect()
}

#[derive(Clone)]
pub struct LuckyDrawService {
    pool: DatabaseConnection,
    config: LuckyDrawConfig,
    // 同一实例内串行开奖
    draw_lock: Arc<Mutex<()>>,
}

impl LuckyDrawService {
    pub fn new(pool: DatabaseConnection, config: LuckyDrawConfig) -> Self {
        Self {
            pool,
            config,
            draw_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 报名参加抽奖（每个邮箱仅一次）
    pub async fn enter(
        &self,
        request: EnterLuckyDrawRequest,
        client: ClientInfo,
    ) -> AppResult<EnterLuckyDrawResponse> {
        RequiredFields::new()
            .check("name", request.name.as_deref())
            .check("email", request.email.as_deref())
            .check("phone", request.phone.as_deref())
            .finish()?;

        let email = normalize_email(request.email.as_deref().unwrap_or_default())?;
        let phone = normalize_phone(request.phone.as_deref().unwrap_or_default())?;

        let existing = entries::Entity::find()
            .filter(entries::Column::Email.eq(email.as_str()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(DUPLICATE_ENTRY.to_string()));
        }

        let entry = entries::ActiveModel {
            name: Set(clean_required(request.name)),
            email: Set(email),
            phone: Set(phone),
            ip_address: Set(client.ip_address),
            user_agent: Set(client.user_agent),
            is_winner: Set(false),
            draw_date: Set(None),
            prize: Set(None),
            notified: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_ENTRY))?;

        log::info!("Lucky draw entry {} created", entry.id);

        Ok(EnterLuckyDrawResponse { entry_id: entry.id })
    }

    /// 开奖
    ///
    /// 逻辑:
    /// 1. 校验中奖人数（缺省取配置值，<= 0 拒绝）
    /// 2. 事务内读取 is_winner = false 的候选池（支持行锁的数据库使用 FOR UPDATE）
    /// 3. 候选池为空返回 NoEligibleEntries
    /// 4. 随机抽取 min(K, 候选数) 名
    /// 5. 单条 UPDATE 标记中奖，附带 is_winner = false 条件；影响行数不符则回滚
    pub async fn run_draw(&self, request: RunDrawRequest) -> AppResult<RunDrawResponse> {
        let count = self.resolve_winner_count(request.number_of_winners)?;
        let prize =
            clean_optional(request.prize).unwrap_or_else(|| self.config.default_prize.clone());

        let _guard = self.draw_lock.lock().await;
        let txn = self.pool.begin().await?;

        let mut eligible_query = entries::Entity::find()
            .filter(entries::Column::IsWinner.eq(false))
            .order_by_asc(entries::Column::Id);
        if txn.get_database_backend() != DbBackend::Sqlite {
            eligible_query = eligible_query.lock_exclusive();
        }
        let eligible = eligible_query.all(&txn).await?;

        if eligible.is_empty() {
            return Err(AppError::NoEligibleEntries);
        }

        let pool_size = eligible.len();
        let selected = {
            let mut rng = rand::thread_rng();
            select_winners(eligible, count, &mut rng)
        };
        let winner_ids: Vec<i32> = selected.iter().map(|e| e.id).collect();
        let draw_date = Utc::now();

        let result = entries::Entity::update_many()
            .col_expr(entries::Column::IsWinner, Expr::value(true))
            .col_expr(entries::Column::DrawDate, Expr::value(Some(draw_date)))
            .col_expr(entries::Column::Prize, Expr::value(Some(prize.clone())))
            .filter(entries::Column::Id.is_in(winner_ids.clone()))
            .filter(entries::Column::IsWinner.eq(false))
            .exec(&txn)
            .await?;

        if result.rows_affected != winner_ids.len() as u64 {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "The entry pool changed during the draw, please retry".to_string(),
            ));
        }

        let mut updated = entries::Entity::find()
            .filter(entries::Column::Id.is_in(winner_ids.clone()))
            .all(&txn)
            .await?;

        txn.commit().await?;

        // 按抽取顺序返回
        updated.sort_by_key(|m| winner_ids.iter().position(|id| *id == m.id));

        log::info!(
            "Lucky draw completed: {} winner(s) out of {} eligible, prize \"{}\"",
            updated.len(),
            pool_size,
            prize
        );

        Ok(RunDrawResponse {
            winners: updated.into_iter().map(Into::into).collect(),
            draw_date,
            prize,
        })
    }

    /// 分页获取抽奖参与记录（可按是否中奖、关键词过滤）
    pub async fn list_entries(
        &self,
        query: &LuckyDrawEntryQuery,
    ) -> AppResult<PaginatedResponse<LuckyDrawEntryResponse>> {
        let params = query.pagination();

        let mut select = entries::Entity::find();
        if let Some(is_winner) = query.is_winner {
            select = select.filter(entries::Column::IsWinner.eq(is_winner));
        }
        if let Some(cond) = contains_any(
            &[
                entries::Column::Name,
                entries::Column::Email,
                entries::Column::Phone,
            ],
            query.search.as_deref(),
        ) {
            select = select.filter(cond);
        }

        let total = select.clone().count(&self.pool).await?;

        let items = select
            .order_by_desc(entries::Column::CreatedAt)
            .order_by_desc(entries::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            &params,
            total,
        ))
    }

    /// 标记中奖者已通知
    pub async fn mark_notified(&self, entry_id: i32) -> AppResult<LuckyDrawEntryResponse> {
        let entry = entries::Entity::find_by_id(entry_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Lucky draw entry not found".to_string()))?;

        if !entry.is_winner {
            return Err(AppError::ValidationError(
                "Only winners can be marked as notified".to_string(),
            ));
        }
        if entry.notified {
            return Ok(entry.into());
        }

        let mut am = entry.into_active_model();
        am.notified = Set(true);
        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    pub async fn stats(&self) -> AppResult<LuckyDrawStatsResponse> {
        let total_entries = entries::Entity::find().count(&self.pool).await?;
        let winners = entries::Entity::find()
            .filter(entries::Column::IsWinner.eq(true))
            .count(&self.pool)
            .await?;

        Ok(LuckyDrawStatsResponse {
            total_entries,
            winners,
            eligible: total_entries.saturating_sub(winners),
        })
    }

    fn resolve_winner_count(&self, requested: Option<i64>) -> AppResult<usize> {
        let count = requested.unwrap_or(i64::from(self.config.default_winners));
        if count <= 0 {
            return Err(AppError::ValidationError(
                "numberOfWinners must be a positive integer".to_string(),
            ));
        }
        Ok(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_select_exactly_min_k_p_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        for pool_size in 0..12usize {
            for k in 0..15usize {
                let pool: Vec<usize> = (0..pool_size).collect();
                let picked = select_winners(pool, k, &mut rng);
                assert_eq!(picked.len(), k.min(pool_size));
                let unique: HashSet<_> = picked.iter().collect();
                assert_eq!(unique.len(), picked.len());
                assert!(picked.iter().all(|p| *p < pool_size));
            }
        }
    }

    #[test]
    fn test_select_whole_pool_when_k_exceeds_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = select_winners(vec!['a', 'b', 'c'], 10, &mut rng);
        picked.sort();
        assert_eq!(picked, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_select_is_deterministic_for_a_seed() {
        let pool: Vec<u32> = (0..50).collect();
        let a = select_winners(pool.clone(), 5, &mut StdRng::seed_from_u64(42));
        let b = select_winners(pool, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits = [0u32; 4];
        let rounds = 20_000;
        for _ in 0..rounds {
            for w in select_winners(vec![0usize, 1, 2, 3], 2, &mut rng) {
                hits[w] += 1;
            }
        }
        // 每个元素期望被选中 rounds * 2 / 4 次
        let expected = (rounds * 2 / 4) as f64;
        for h in hits {
            let deviation = (h as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "hits {hits:?}");
        }
    }

    #[test]
    fn test_select_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked: Vec<i32> = select_winners(Vec::new(), 3, &mut rng);
        assert!(picked.is_empty());
    }
}
