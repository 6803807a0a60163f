pub(crate) mod entities;

use sea_orm::EntityTrait;
use sea_orm_migration::{prelude::*, sea_orm::Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_database_backend();
        let schema = Schema::new(db);

        create_entity_table(manager, &schema, entities::event::Entity).await?;
        create_entity_table(manager, &schema, entities::guest::Entity).await?;
        create_entity_table(manager, &schema, entities::item::Entity).await?;

        create_entity_table(manager, &schema, entities::event_guest::Entity).await?;
        create_entity_table(manager, &schema, entities::assigned_item::Entity).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_database_backend();
        let schema = Schema::new(db);

        drop_entity_table(manager, &schema, entities::assigned_item::Entity).await?;
        drop_entity_table(manager, &schema, entities::event_guest::Entity).await?;

        drop_entity_table(manager, &schema, entities::item::Entity).await?;
        drop_entity_table(manager, &schema, entities::guest::Entity).await?;
        drop_entity_table(manager, &schema, entities::event::Entity).await?;

        Ok(())
    }
}

async fn create_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

async fn drop_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .drop_table(
            Table::drop()
                .table(
                    schema
                        .create_table_from_entity(entity)
                        .get_table_name()
                        .cloned()
                        .unwrap(),
                )
                .take(),
        )
        .await
}
