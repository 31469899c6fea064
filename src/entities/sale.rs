use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pump sale (vente)
///
/// `total` is derived: quantity x unit price, plus the configured tax.
/// The service recomputes it on every write.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ventes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,

    pub product: String,
    pub category: String,

    pub quantity: Decimal,
    pub unit_price: Decimal,

    /// quantity * unit_price * (1 + tax rate)
    pub total: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
