use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_catalog_tables::Migration),
            Box::new(m20240101_000002_create_game_and_monitor_tables::Migration),
            Box::new(m20240101_000003_create_user_and_purchase_tables::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Description,
    Stock,
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Publisher,
    PublishedYear,
    Language,
    Genre,
    ProductId,
    CategoryId,
}

#[derive(DeriveIden)]
enum Monitors {
    Table,
    Id,
    Brand,
    Size,
    ReleaseYear,
    ProductId,
    CategoryId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Email,
    UserType,
}

#[derive(DeriveIden)]
enum Purchases {
    Table,
    Id,
    PurchaseDate,
    UserId,
    ProductId,
}

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

mod m20240101_000001_create_catalog_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(id_column(Categories::Id))
                        .col(ColumnDef::new(Categories::Name).string_len(50).not_null())
                        .col(
                            ColumnDef::new(Categories::Description)
                                .string_len(2000)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(id_column(Products::Id))
                        .col(ColumnDef::new(Products::Name).string_len(50).not_null())
                        .col(ColumnDef::new(Products::Price).decimal_len(16, 2).not_null())
                        .col(
                            ColumnDef::new(Products::Description)
                                .string_len(2000)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::Stock).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }
}

mod m20240101_000002_create_game_and_monitor_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_game_and_monitor_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Games::Table)
                        .if_not_exists()
                        .col(id_column(Games::Id))
                        .col(ColumnDef::new(Games::Publisher).string_len(50).not_null())
                        .col(ColumnDef::new(Games::PublishedYear).integer().not_null())
                        .col(ColumnDef::new(Games::Language).string_len(32).not_null())
                        .col(ColumnDef::new(Games::Genre).string_len(32).not_null())
                        .col(ColumnDef::new(Games::ProductId).integer().not_null())
                        .col(ColumnDef::new(Games::CategoryId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_games_product_id")
                                .from(Games::Table, Games::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_games_category_id")
                                .from(Games::Table, Games::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // One game per product
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_games_product_id")
                        .table(Games::Table)
                        .col(Games::ProductId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_games_category_id")
                        .table(Games::Table)
                        .col(Games::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Monitors::Table)
                        .if_not_exists()
                        .col(id_column(Monitors::Id))
                        .col(ColumnDef::new(Monitors::Brand).string_len(100).not_null())
                        .col(ColumnDef::new(Monitors::Size).integer().not_null())
                        .col(ColumnDef::new(Monitors::ReleaseYear).integer().not_null())
                        .col(ColumnDef::new(Monitors::ProductId).integer().not_null())
                        .col(ColumnDef::new(Monitors::CategoryId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_monitors_product_id")
                                .from(Monitors::Table, Monitors::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_monitors_category_id")
                                .from(Monitors::Table, Monitors::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_monitors_product_id")
                        .table(Monitors::Table)
                        .col(Monitors::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Monitors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Games::Table).to_owned())
                .await
        }
    }
}

mod m20240101_000003_create_user_and_purchase_tables {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_user_and_purchase_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(id_column(Users::Id))
                        .col(ColumnDef::new(Users::Username).string_len(20).not_null())
                        .col(ColumnDef::new(Users::Password).string_len(100).not_null())
                        .col(ColumnDef::new(Users::Email).string_len(100).not_null())
                        .col(ColumnDef::new(Users::UserType).string_len(20).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Purchases::Table)
                        .if_not_exists()
                        .col(id_column(Purchases::Id))
                        .col(ColumnDef::new(Purchases::PurchaseDate).date().not_null())
                        .col(ColumnDef::new(Purchases::UserId).integer().not_null())
                        .col(ColumnDef::new(Purchases::ProductId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_purchases_user_id")
                                .from(Purchases::Table, Purchases::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_purchases_product_id")
                                .from(Purchases::Table, Purchases::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_purchases_user_id")
                        .table(Purchases::Table)
                        .col(Purchases::UserId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Purchases::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }
}
