// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Podcasts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Podcasts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Podcasts::Title).string().not_null())
                    .col(ColumnDef::new(Podcasts::Category).string().not_null())
                    .col(ColumnDef::new(Podcasts::Rating).integer())
                    .col(
                        ColumnDef::new(Podcasts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Podcasts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 外键在建表时内联声明，SQLite 不支持事后 ALTER 添加外键
        manager
            .create_table(
                Table::create()
                    .table(Episodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Episodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Episodes::Title).string().not_null())
                    .col(ColumnDef::new(Episodes::Category).string().not_null())
                    .col(ColumnDef::new(Episodes::PodcastId).integer().not_null())
                    .col(
                        ColumnDef::new(Episodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Episodes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_episodes_podcast")
                            .from(Episodes::Table, Episodes::PodcastId)
                            .to(Podcasts::Table, Podcasts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_episodes_podcast_id")
                    .table(Episodes::Table)
                    .col(Episodes::PodcastId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Episodes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Podcasts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Podcasts {
    Table,
    Id,
    Title,
    Category,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Episodes {
    Table,
    Id,
    Title,
    Category,
    PodcastId,
    CreatedAt,
    UpdatedAt,
}
