use sea_orm_migration::{prelude::*, schema::*};

use super::m20260107_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectionId::Table)
                    .if_not_exists()
                    .col(pk_auto(ConnectionId::Id))
                    .col(string_uniq(ConnectionId::ConnectionId))
                    .col(integer(ConnectionId::UserId))
                    .col(
                        timestamp(ConnectionId::ConnectedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connection_id_user_id")
                            .from(ConnectionId::Table, ConnectionId::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConnectionId::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConnectionId {
    Table,
    Id,
    ConnectionId,
    UserId,
    ConnectedAt,
}
