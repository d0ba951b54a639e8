use sea_orm_migration::prelude::*;

/// Universities shown on the public site; courses and contact leads point here.
#[derive(DeriveIden)]
pub(crate) enum Universities {
    Table,
    Id,
    Name,
    Slug,
    Country,
    City,
    Description,
    Ranking,
    LogoUrl,
    Website,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    UniversityId,
    Name,
    Level,
    Duration,
    TuitionFee,
    Intake,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    Author,
    CoverImage,
    Published,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    University,
    Country,
    Message,
    Rating,
    PhotoUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProcessSteps {
    Table,
    Id,
    StepNumber,
    Title,
    Description,
    Icon,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Documentations {
    Table,
    Id,
    Title,
    Category,
    Description,
    IsRequired,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Universities::Table)
                    .if_not_exists()
                    .col(&mut id_col(Universities::Id))
                    .col(ColumnDef::new(Universities::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Universities::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Universities::Country).string_len(128).not_null())
                    .col(ColumnDef::new(Universities::City).string_len(128).null())
                    .col(ColumnDef::new(Universities::Description).text().null())
                    .col(ColumnDef::new(Universities::Ranking).integer().null())
                    .col(ColumnDef::new(Universities::LogoUrl).string_len(512).null())
                    .col(ColumnDef::new(Universities::Website).string_len(512).null())
                    .col(
                        ColumnDef::new(Universities::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut timestamp_col(Universities::CreatedAt))
                    .col(&mut timestamp_col(Universities::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_universities_slug_unique")
                    .table(Universities::Table)
                    .col(Universities::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 课程随大学删除
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(&mut id_col(Courses::Id))
                    .col(ColumnDef::new(Courses::UniversityId).integer().not_null())
                    .col(ColumnDef::new(Courses::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Level).string_len(64).not_null())
                    .col(ColumnDef::new(Courses::Duration).string_len(64).null())
                    .col(ColumnDef::new(Courses::TuitionFee).string_len(64).null())
                    .col(ColumnDef::new(Courses::Intake).string_len(128).null())
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(&mut timestamp_col(Courses::CreatedAt))
                    .col(&mut timestamp_col(Courses::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_university")
                            .from(Courses::Table, Courses::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_courses_university")
                    .table(Courses::Table)
                    .col(Courses::UniversityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(&mut id_col(Blogs::Id))
                    .col(ColumnDef::new(Blogs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Blogs::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Blogs::Excerpt).text().null())
                    .col(ColumnDef::new(Blogs::Content).text().not_null())
                    .col(ColumnDef::new(Blogs::Author).string_len(255).null())
                    .col(ColumnDef::new(Blogs::CoverImage).string_len(512).null())
                    .col(
                        ColumnDef::new(Blogs::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Blogs::PublishedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(&mut timestamp_col(Blogs::CreatedAt))
                    .col(&mut timestamp_col(Blogs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_blogs_slug_unique")
                    .table(Blogs::Table)
                    .col(Blogs::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(&mut id_col(Testimonials::Id))
                    .col(ColumnDef::new(Testimonials::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Testimonials::University).string_len(255).null())
                    .col(ColumnDef::new(Testimonials::Country).string_len(128).null())
                    .col(ColumnDef::new(Testimonials::Message).text().not_null())
                    .col(
                        ColumnDef::new(Testimonials::Rating)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(Testimonials::PhotoUrl).string_len(512).null())
                    .col(
                        ColumnDef::new(Testimonials::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(&mut timestamp_col(Testimonials::CreatedAt))
                    .col(&mut timestamp_col(Testimonials::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProcessSteps::Table)
                    .if_not_exists()
                    .col(&mut id_col(ProcessSteps::Id))
                    .col(ColumnDef::new(ProcessSteps::StepNumber).integer().not_null())
                    .col(ColumnDef::new(ProcessSteps::Title).string_len(255).not_null())
                    .col(ColumnDef::new(ProcessSteps::Description).text().not_null())
                    .col(ColumnDef::new(ProcessSteps::Icon).string_len(128).null())
                    .col(&mut timestamp_col(ProcessSteps::CreatedAt))
                    .col(&mut timestamp_col(ProcessSteps::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_process_steps_number_unique")
                    .table(ProcessSteps::Table)
                    .col(ProcessSteps::StepNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Documentations::Table)
                    .if_not_exists()
                    .col(&mut id_col(Documentations::Id))
                    .col(ColumnDef::new(Documentations::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Documentations::Category)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documentations::Description).text().not_null())
                    .col(
                        ColumnDef::new(Documentations::IsRequired)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Documentations::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(&mut timestamp_col(Documentations::CreatedAt))
                    .col(&mut timestamp_col(Documentations::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Documentations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(ProcessSteps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Blogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Universities::Table).to_owned())
            .await?;
        Ok(())
    }
}
