use crate::entities::reservations;
use chrono::Utc;
use models::{reservation_draft::ReservationDraft, reservation_status::ReservationStatus};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter,
};

pub struct ReservationService;

impl ReservationService {
    /// Fetch every reservation in storage-native order
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find().all(db).await
    }

    /// Insert a new reservation, stamping the server-managed fields.
    ///
    /// The reservation date defaults to the creation instant when the draft
    /// leaves it unset; the status defaults to CONFIRMED.
    pub async fn create(
        db: &DatabaseConnection,
        draft: ReservationDraft,
    ) -> Result<reservations::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let reservation = reservations::ActiveModel {
            reservation_id: NotSet,
            guest_name: Set(draft.guest_name),
            room_number: Set(draft.room_number),
            contact_number: Set(draft.contact_number),
            reservation_date: Set(Some(draft.reservation_date.unwrap_or(now))),
            created_at: Set(now),
            updated_at: Set(now),
            status: Set(draft.status.unwrap_or_default()),
        };

        reservation.insert(db).await
    }

    /// Replace every consumer-supplied field of an existing reservation.
    ///
    /// The id and created_at of `existing` are preserved; updated_at is
    /// refreshed.
    pub async fn update(
        db: &DatabaseConnection,
        existing: reservations::Model,
        draft: ReservationDraft,
    ) -> Result<reservations::Model, DbErr> {
        let reservation = reservations::ActiveModel {
            reservation_id: Set(existing.reservation_id),
            guest_name: Set(draft.guest_name),
            room_number: Set(draft.room_number),
            contact_number: Set(draft.contact_number),
            reservation_date: Set(draft.reservation_date),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now().naive_utc()),
            status: Set(draft.status.unwrap_or_default()),
        };

        reservation.update(db).await
    }

    /// Mutate only the status field of an existing reservation
    pub async fn update_status(
        db: &DatabaseConnection,
        existing: reservations::Model,
        status: ReservationStatus,
    ) -> Result<reservations::Model, DbErr> {
        let mut reservation = existing.into_active_model();
        reservation.status = Set(status);
        reservation.updated_at = Set(Utc::now().naive_utc());

        reservation.update(db).await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<reservations::Model>, DbErr> {
        reservations::Entity::find_by_id(id).one(db).await
    }

    pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let count = reservations::Entity::find()
            .filter(reservations::Column::ReservationId.eq(id))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        reservations::Entity::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    /// Substring match on guest name, using the store's native LIKE semantics
    pub async fn find_by_guest_name_containing(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::GuestName.contains(name))
            .all(db)
            .await
    }

    pub async fn find_by_room_number(
        db: &DatabaseConnection,
        room_number: i32,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::RoomNumber.eq(room_number))
            .all(db)
            .await
    }

    pub async fn find_by_contact_number(
        db: &DatabaseConnection,
        contact_number: &str,
    ) -> Result<Vec<reservations::Model>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::ContactNumber.eq(contact_number))
            .all(db)
            .await
    }
}
