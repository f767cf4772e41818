use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create categoria enum
        manager
            .create_type(
                Type::create()
                    .as_enum(Categoria::Enum)
                    .values([
                        Categoria::Electronica,
                        Categoria::Ropa,
                        Categoria::Hogar,
                        Categoria::Deportes,
                        Categoria::Libros,
                        Categoria::Otros,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create productos table
        manager
            .create_table(
                Table::create()
                    .table(Productos::Table)
                    .if_not_exists()
                    .col(pk_uuid(Productos::Id))
                    .col(string(Productos::Nombre))
                    .col(text(Productos::Descripcion).default(""))
                    .col(double(Productos::Precio))
                    .col(integer(Productos::Stock).default(0))
                    .col(
                        ColumnDef::new(Productos::Categoria)
                            .enumeration(
                                Categoria::Enum,
                                [
                                    Categoria::Electronica,
                                    Categoria::Ropa,
                                    Categoria::Hogar,
                                    Categoria::Deportes,
                                    Categoria::Libros,
                                    Categoria::Otros,
                                ],
                            )
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the category listing endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_productos_categoria")
                    .table(Productos::Table)
                    .col(Productos::Categoria)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productos::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Categoria::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Productos {
    Table,
    Id,
    Nombre,
    Descripcion,
    Precio,
    Stock,
    Categoria,
}

#[derive(DeriveIden)]
enum Categoria {
    #[sea_orm(iden = "categoria")]
    Enum,
    #[sea_orm(iden = "ELECTRONICA")]
    Electronica,
    #[sea_orm(iden = "ROPA")]
    Ropa,
    #[sea_orm(iden = "HOGAR")]
    Hogar,
    #[sea_orm(iden = "DEPORTES")]
    Deportes,
    #[sea_orm(iden = "LIBROS")]
    Libros,
    #[sea_orm(iden = "OTROS")]
    Otros,
}
