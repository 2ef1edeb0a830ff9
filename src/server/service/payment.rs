use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::payment::{Payment, PaymentParams},
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: PaymentParams) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, payment_id: i32) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        repo.find_by_id(payment_id)
            .await?
            .ok_or_else(payment_not_found)
    }

    pub async fn update(&self, payment_id: i32, params: PaymentParams) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        repo.update(payment_id, params)
            .await?
            .ok_or_else(payment_not_found)
    }

    pub async fn delete(&self, payment_id: i32) -> Result<(), AppError> {
        let repo = PaymentRepository::new(self.db);

        if !repo.delete(payment_id).await? {
            return Err(payment_not_found());
        }

        Ok(())
    }
}

fn payment_not_found() -> AppError {
    AppError::NotFound("Payment not found".to_string())
}
