//! Payment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::payment::{Payment, PaymentParams};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment, stamping it with the current time.
    pub async fn create(&self, params: PaymentParams) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            payment_method: ActiveValue::Set(params.payment_method),
            payment_status: ActiveValue::Set(params.payment_status),
            amount: ActiveValue::Set(params.amount),
            transaction_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_id(&self, payment_id: i32) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Payment::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::Payment::find()
            .order_by_asc(entity::payment::Column::PaymentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }

    /// Replaces a payment's details. The transaction date is kept.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - Updated payment
    /// - `Ok(None)` - No payment has this ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        payment_id: i32,
        params: PaymentParams,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(existing) = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::payment::ActiveModel = existing.into();
        active.reservation_id = ActiveValue::Set(params.reservation_id);
        active.payment_method = ActiveValue::Set(params.payment_method);
        active.payment_status = ActiveValue::Set(params.payment_status);
        active.amount = ActiveValue::Set(params.amount);

        let entity = active.update(self.db).await?;

        Ok(Some(Payment::from_entity(entity)))
    }

    /// Deletes a payment by ID, returning whether a row was removed.
    pub async fn delete(&self, payment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::delete_by_id(payment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
