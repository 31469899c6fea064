use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Restocking event (approvisionnement)
///
/// `stock_total` is derived: stock on hand before the delivery plus the
/// incoming volume. The service recomputes it on every write.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "approvisionnements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub date: NaiveDate,
    pub supplier: String,
    pub category: String,
    pub product: String,

    /// Stock on hand before the delivery
    pub stock_before: Decimal,

    /// Incoming volume
    pub stock_incoming: Decimal,

    /// Blend volume, in pump units
    pub blend: Decimal,

    /// stock_before + stock_incoming
    pub stock_total: Decimal,

    /// Designation of the destination tank
    pub tank_location: String,

    pub amount_paid: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
