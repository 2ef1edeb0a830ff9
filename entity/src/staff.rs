use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::staff_schedule::Entity")]
    StaffSchedule,
}

impl Related<super::staff_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
