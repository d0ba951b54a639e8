use sea_orm_migration::prelude::*;

use crate::m20261001_000002_create_content_tables::Universities;

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Education,
    CountryToGo,
    Budget,
    Timeline,
    Message,
    UniversityId,
    Processed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum B2bSubmissions {
    Table,
    Id,
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Country,
    PartnershipType,
    Message,
    Processed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Newsletters {
    Table,
    Id,
    Email,
    IsActive,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 咨询表单：大学可选，大学删除后保留线索
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Name).string_len(255).not_null())
                    .col(ColumnDef::new(ContactSubmissions::Email).string_len(255).not_null())
                    .col(ColumnDef::new(ContactSubmissions::Phone).string_len(32).not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::Education)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::CountryToGo)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Budget).string_len(128).not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::Timeline)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Message).text().not_null())
                    .col(ColumnDef::new(ContactSubmissions::UniversityId).integer().null())
                    .col(
                        ColumnDef::new(ContactSubmissions::Processed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactSubmissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_submissions_university")
                            .from(ContactSubmissions::Table, ContactSubmissions::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(B2bSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(B2bSubmissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(B2bSubmissions::CompanyName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(B2bSubmissions::ContactPerson)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(B2bSubmissions::Email).string_len(255).not_null())
                    .col(ColumnDef::new(B2bSubmissions::Phone).string_len(32).not_null())
                    .col(ColumnDef::new(B2bSubmissions::Country).string_len(128).not_null())
                    .col(
                        ColumnDef::new(B2bSubmissions::PartnershipType)
                            .string_len(128)
                            .null(),
                    )
                    .col(ColumnDef::new(B2bSubmissions::Message).text().not_null())
                    .col(
                        ColumnDef::new(B2bSubmissions::Processed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(B2bSubmissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Newsletters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Newsletters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Newsletters::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Newsletters::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Newsletters::CreatedAt)
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
                    .name("idx_newsletters_email_unique")
                    .table(Newsletters::Table)
                    .col(Newsletters::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Newsletters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(B2bSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(ContactSubmissions::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
