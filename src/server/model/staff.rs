use crate::model::staff::{StaffDto, StaffSummaryDto};

/// Role whose members make up the housekeeping roster.
pub const ROLE_HOUSEKEEPING: &str = "Housekeeping";

#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl Staff {
    pub fn from_entity(entity: entity::staff::Model) -> Self {
        Self {
            staff_id: entity.staff_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role: entity.role,
        }
    }

    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            staff_id: self.staff_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
        }
    }

    pub fn into_summary_dto(self) -> StaffSummaryDto {
        StaffSummaryDto {
            staff_id: self.staff_id,
            first_name: self.first_name,
        }
    }
}
