use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on guest_name for the name search endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_guest_name")
                    .table(Reservations::Table)
                    .col(Reservations::GuestName)
                    .to_owned(),
            )
            .await?;

        // Index on room_number for the by-room lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_room_number")
                    .table(Reservations::Table)
                    .col(Reservations::RoomNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reservations_room_number")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_reservations_guest_name").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Reservations {
    Table,
    GuestName,
    RoomNumber,
}
