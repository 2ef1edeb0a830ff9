//! Guest data repository for database operations.
//!
//! `GuestRepository` is generic over the connection so reservation intake can look up and
//! create guests inside the same transaction as the reservation insert.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::guest::{CreateGuestParams, Guest, UpdateGuestParams};

pub struct GuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuestRepository<'a, C> {
    /// Creates a new GuestRepository over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new guest and returns it with its assigned ID.
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, DbErr> {
        let entity = entity::guest::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Gets a guest by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - Guest exists
    /// - `Ok(None)` - No guest has this ID
    /// - `Err(DbErr)` - Any other database failure
    pub async fn find_by_id(&self, guest_id: i32) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find_by_id(guest_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Gets all guests ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Guest>, DbErr> {
        let entities = entity::prelude::Guest::find()
            .order_by_asc(entity::guest::Column::GuestId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guest::from_entity).collect())
    }

    /// Replaces a guest's contact details, keeping its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - Updated guest
    /// - `Ok(None)` - No guest has this ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateGuestParams) -> Result<Option<Guest>, DbErr> {
        let Some(existing) = entity::prelude::Guest::find_by_id(params.guest_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::guest::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);

        let entity = active.update(self.db).await?;

        Ok(Some(Guest::from_entity(entity)))
    }

    /// Whether any reservation, from any account, references this guest.
    pub async fn has_reservations(&self, guest_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::GuestId.eq(guest_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a guest by ID.
    ///
    /// Fails with a foreign key violation while reservations still reference the guest.
    ///
    /// # Returns
    /// - `Ok(true)` - Guest was deleted
    /// - `Ok(false)` - No guest has this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, guest_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Guest::delete_by_id(guest_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
