use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage tank (cuve)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cuves")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Short designation shown in tables and pump forms
    pub designation: String,

    /// Display name
    pub name: String,

    /// Designation of the product held by this tank
    pub stored_product: String,

    /// Storage capacity in litres
    pub capacity: Decimal,

    /// Purchase price of the tank
    pub purchase_price: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pump::Entity")]
    Pumps,
}

impl Related<super::pump::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pumps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
