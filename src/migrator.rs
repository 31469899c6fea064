// `#[async_trait]` impls of sea-orm's MigrationTrait rely on the elided
// `&SchemaManager` lifetime being late-bound; writing it explicitly as
// `<'_>` conflicts with the trait definition, so allow the 2018 idiom here.
#![allow(elided_lifetimes_in_paths)]

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_stations_table::Migration),
            Box::new(m20250101_000002_create_cuves_table::Migration),
            Box::new(m20250101_000003_create_pompes_table::Migration),
            Box::new(m20250101_000004_create_produits_table::Migration),
            Box::new(m20250101_000005_create_fournisseurs_table::Migration),
            Box::new(m20250101_000006_create_employes_table::Migration),
            Box::new(m20250101_000007_create_clients_table::Migration),
            Box::new(m20250101_000008_create_approvisionnements_table::Migration),
            Box::new(m20250101_000009_create_ventes_table::Migration),
            Box::new(m20250101_000010_create_achats_table::Migration),
            Box::new(m20250101_000011_create_feedbacks_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250101_000001_create_stations_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_stations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stations::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Stations::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Stations::Designation).string().not_null())
                        .col(ColumnDef::new(Stations::Activities).string().not_null())
                        .col(ColumnDef::new(Stations::FiscalId).string().not_null())
                        .col(ColumnDef::new(Stations::BankAccount).string().not_null())
                        .col(ColumnDef::new(Stations::Commune).string().not_null())
                        .col(ColumnDef::new(Stations::Email).string().not_null())
                        .col(ColumnDef::new(Stations::TradeRegister).string().not_null())
                        .col(
                            ColumnDef::new(Stations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Stations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Stations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Stations {
        Table,
        Id,
        Designation,
        Activities,
        FiscalId,
        BankAccount,
        Commune,
        Email,
        TradeRegister,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000002_create_cuves_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_cuves_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Cuves::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Cuves::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Cuves::Designation).string().not_null())
                        .col(ColumnDef::new(Cuves::Name).string().not_null())
                        .col(ColumnDef::new(Cuves::StoredProduct).string().not_null())
                        .col(ColumnDef::new(Cuves::Capacity).decimal().not_null())
                        .col(ColumnDef::new(Cuves::PurchasePrice).decimal().not_null())
                        .col(
                            ColumnDef::new(Cuves::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Cuves::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Cuves::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Cuves {
        Table,
        Id,
        Designation,
        Name,
        StoredProduct,
        Capacity,
        PurchasePrice,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000003_create_pompes_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_pompes_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Pompes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Pompes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Pompes::Name).string().not_null())
                        .col(ColumnDef::new(Pompes::Content).string().not_null())
                        .col(ColumnDef::new(Pompes::TankId).uuid().not_null())
                        .col(
                            ColumnDef::new(Pompes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Pompes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_pompes_tank_id")
                                .from(Pompes::Table, Pompes::TankId)
                                .to(Cuves::Table, Cuves::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Pompes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Pompes {
        Table,
        Id,
        Name,
        Content,
        TankId,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Cuves {
        Table,
        Id,
    }
}

mod m20250101_000004_create_produits_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000004_create_produits_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Produits::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Produits::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Produits::Designation).string().not_null())
                        .col(ColumnDef::new(Produits::PumpPrice).decimal().not_null())
                        .col(ColumnDef::new(Produits::Category).string().not_null())
                        .col(ColumnDef::new(Produits::WholesaleUnit).string().not_null())
                        .col(ColumnDef::new(Produits::RetailUnit).string().not_null())
                        .col(ColumnDef::new(Produits::Capacity).decimal().not_null())
                        .col(
                            ColumnDef::new(Produits::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Produits::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Produits::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Produits {
        Table,
        Id,
        Designation,
        PumpPrice,
        Category,
        WholesaleUnit,
        RetailUnit,
        Capacity,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000005_create_fournisseurs_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000005_create_fournisseurs_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Fournisseurs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Fournisseurs::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Fournisseurs::Name).string().not_null())
                        .col(ColumnDef::new(Fournisseurs::Address).string().not_null())
                        .col(ColumnDef::new(Fournisseurs::Phone).string().not_null())
                        .col(ColumnDef::new(Fournisseurs::Email).string().not_null())
                        .col(ColumnDef::new(Fournisseurs::Category).string().not_null())
                        .col(
                            ColumnDef::new(Fournisseurs::DeliveryFrequency)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Fournisseurs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Fournisseurs::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Fournisseurs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Fournisseurs {
        Table,
        Id,
        Name,
        Address,
        Phone,
        Email,
        Category,
        DeliveryFrequency,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000006_create_employes_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000006_create_employes_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Employes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Employes::FirstName).string().not_null())
                        .col(ColumnDef::new(Employes::LastName).string().not_null())
                        .col(ColumnDef::new(Employes::BirthDate).date().not_null())
                        .col(ColumnDef::new(Employes::Age).integer().not_null())
                        .col(ColumnDef::new(Employes::Email).string().not_null())
                        .col(ColumnDef::new(Employes::MaritalStatus).string().not_null())
                        .col(ColumnDef::new(Employes::Phone).string().not_null())
                        .col(ColumnDef::new(Employes::BankAccount).string().not_null())
                        .col(
                            ColumnDef::new(Employes::EmergencyContactName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Employes::EmergencyContactPhone)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Employes::Nationality).string().not_null())
                        .col(
                            ColumnDef::new(Employes::RegistrationNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Employes::Position)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Employes::NationalId).string().not_null())
                        .col(ColumnDef::new(Employes::PasswordHash).string().not_null())
                        .col(
                            ColumnDef::new(Employes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Employes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employes {
        Table,
        Id,
        FirstName,
        LastName,
        BirthDate,
        Age,
        Email,
        MaritalStatus,
        Phone,
        BankAccount,
        EmergencyContactName,
        EmergencyContactPhone,
        Nationality,
        RegistrationNumber,
        Position,
        NationalId,
        PasswordHash,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000007_create_clients_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000007_create_clients_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Clients::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Clients::FirstName).string().not_null())
                        .col(ColumnDef::new(Clients::LastName).string().not_null())
                        .col(
                            ColumnDef::new(Clients::Phone)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Clients::Email).string().not_null())
                        .col(
                            ColumnDef::new(Clients::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Clients::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Clients {
        Table,
        Id,
        FirstName,
        LastName,
        Phone,
        Email,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000008_create_approvisionnements_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000008_create_approvisionnements_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Approvisionnements::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Approvisionnements::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Approvisionnements::Date).date().not_null())
                        .col(
                            ColumnDef::new(Approvisionnements::Supplier)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::Category)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::Product)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::StockBefore)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::StockIncoming)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::Blend)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::StockTotal)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::TankLocation)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::AmountPaid)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Approvisionnements::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Approvisionnements::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Approvisionnements {
        Table,
        Id,
        Date,
        Supplier,
        Category,
        Product,
        StockBefore,
        StockIncoming,
        Blend,
        StockTotal,
        TankLocation,
        AmountPaid,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000009_create_ventes_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000009_create_ventes_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Ventes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Ventes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Ventes::ClientName).string().not_null())
                        .col(ColumnDef::new(Ventes::ClientPhone).string().not_null())
                        .col(ColumnDef::new(Ventes::ClientEmail).string().not_null())
                        .col(ColumnDef::new(Ventes::Product).string().not_null())
                        .col(ColumnDef::new(Ventes::Category).string().not_null())
                        .col(ColumnDef::new(Ventes::Quantity).decimal().not_null())
                        .col(ColumnDef::new(Ventes::UnitPrice).decimal().not_null())
                        .col(ColumnDef::new(Ventes::Total).decimal().not_null())
                        .col(
                            ColumnDef::new(Ventes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Ventes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Ventes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Ventes {
        Table,
        Id,
        ClientName,
        ClientPhone,
        ClientEmail,
        Product,
        Category,
        Quantity,
        UnitPrice,
        Total,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000010_create_achats_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000010_create_achats_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Achats::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Achats::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Achats::Supplier).string().not_null())
                        .col(ColumnDef::new(Achats::Category).string().not_null())
                        .col(ColumnDef::new(Achats::Product).string().not_null())
                        .col(ColumnDef::new(Achats::Price).decimal().not_null())
                        .col(ColumnDef::new(Achats::PaymentDate).date().not_null())
                        .col(
                            ColumnDef::new(Achats::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Achats::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Achats::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Achats {
        Table,
        Id,
        Supplier,
        Category,
        Product,
        Price,
        PaymentDate,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000011_create_feedbacks_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000011_create_feedbacks_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Feedbacks::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Feedbacks::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Feedbacks::AuthorRole).string().not_null())
                        .col(ColumnDef::new(Feedbacks::Message).string().not_null())
                        .col(
                            ColumnDef::new(Feedbacks::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Feedbacks {
        Table,
        Id,
        AuthorRole,
        Message,
        CreatedAt,
    }
}
