use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(big_integer(Addresses::Id).auto_increment().primary_key())
                    .col(string(Addresses::Street))
                    .col(string(Addresses::City))
                    .col(string(Addresses::State))
                    .col(string(Addresses::Country))
                    .col(big_integer(Addresses::PinCode))
                    .col(double(Addresses::Latitude))
                    .col(double(Addresses::Longitude))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_addresses_street", Addresses::Street),
            ("idx_addresses_city", Addresses::City),
            ("idx_addresses_state", Addresses::State),
            ("idx_addresses_country", Addresses::Country),
            ("idx_addresses_pin_code", Addresses::PinCode),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Addresses::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    Street,
    City,
    State,
    Country,
    PinCode,
    Latitude,
    Longitude,
}
