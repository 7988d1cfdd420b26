use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(indexed)]
    pub expiry_date: Date,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub quantity: Option<f64>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub unit: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
