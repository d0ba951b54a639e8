use sea_orm_migration::prelude::*;

/// Lucky Draw Entries
///
/// - email 唯一：同一邮箱只能参与一次
/// - draw_date / prize 仅在 is_winner = true 时有值
#[derive(DeriveIden)]
enum LuckyDrawEntries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    IpAddress,
    UserAgent,
    IsWinner,
    DrawDate,
    Prize,
    Notified,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LuckyDrawEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LuckyDrawEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LuckyDrawEntries::Name).string_len(255).not_null())
                    .col(ColumnDef::new(LuckyDrawEntries::Email).string_len(255).not_null())
                    .col(ColumnDef::new(LuckyDrawEntries::Phone).string_len(32).not_null())
                    .col(ColumnDef::new(LuckyDrawEntries::IpAddress).string_len(64).null())
                    .col(ColumnDef::new(LuckyDrawEntries::UserAgent).text().null())
                    .col(
                        ColumnDef::new(LuckyDrawEntries::IsWinner)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LuckyDrawEntries::DrawDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(LuckyDrawEntries::Prize).string_len(255).null())
                    .col(
                        ColumnDef::new(LuckyDrawEntries::Notified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LuckyDrawEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lucky_draw_entries_email_unique")
                    .table(LuckyDrawEntries::Table)
                    .col(LuckyDrawEntries::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 抽奖时按 is_winner 过滤候选池
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lucky_draw_entries_is_winner")
                    .table(LuckyDrawEntries::Table)
                    .col(LuckyDrawEntries::IsWinner)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(LuckyDrawEntries::Table)
                    .to_owned(),
            )
            .await
    }
}
