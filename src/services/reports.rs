use crate::{
    entities::{
        restock::{self, Entity as Restock},
        sale::Entity as Sale,
        tank::Entity as Tank,
    },
    errors::ServiceError,
};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, Order, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

/// Current stock situation of one tank
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TankStockLevel {
    pub tank_id: Uuid,
    pub designation: String,
    pub stored_product: String,
    pub capacity: Decimal,
    /// Total stock recorded by the most recent restock, zero if none
    pub stock: Decimal,
}

/// Aggregated sales for one product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSales {
    pub product: String,
    pub sale_count: u64,
    pub quantity: Decimal,
    pub revenue: Decimal,
}

/// Sales summary across all products
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesSummary {
    pub products: Vec<ProductSales>,
    pub total_sales: u64,
    pub total_revenue: Decimal,
}

/// Read-side aggregations feeding the dashboard charts
#[derive(Clone)]
pub struct ReportService {
    db: Arc<DatabaseConnection>,
}

impl ReportService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Stock level per tank, taken from the most recent restock that
    /// targeted the tank.
    #[instrument(skip(self))]
    pub async fn stock_levels(&self) -> Result<Vec<TankStockLevel>, ServiceError> {
        let tanks = Tank::find().all(&*self.db).await?;
        let restocks = Restock::find()
            .order_by(restock::Column::Date, Order::Desc)
            .order_by(restock::Column::CreatedAt, Order::Desc)
            .all(&*self.db)
            .await?;

        let levels = tanks
            .into_iter()
            .map(|tank| {
                let stock = restocks
                    .iter()
                    .find(|r| r.tank_location == tank.designation)
                    .map(|r| r.stock_total)
                    .unwrap_or(Decimal::ZERO);

                TankStockLevel {
                    tank_id: tank.id,
                    designation: tank.designation,
                    stored_product: tank.stored_product,
                    capacity: tank.capacity,
                    stock,
                }
            })
            .collect();

        Ok(levels)
    }

    /// Revenue and volume per product plus grand totals
    #[instrument(skip(self))]
    pub async fn sales_summary(&self) -> Result<SalesSummary, ServiceError> {
        let sales = Sale::find().all(&*self.db).await?;

        let mut per_product: BTreeMap<String, ProductSales> = BTreeMap::new();
        let mut total_sales = 0u64;
        let mut total_revenue = Decimal::ZERO;

        for sale in sales {
            total_sales += 1;
            total_revenue += sale.total;

            let entry = per_product
                .entry(sale.product.clone())
                .or_insert_with(|| ProductSales {
                    product: sale.product.clone(),
                    sale_count: 0,
                    quantity: Decimal::ZERO,
                    revenue: Decimal::ZERO,
                });
            entry.sale_count += 1;
            entry.quantity += sale.quantity;
            entry.revenue += sale.total;
        }

        Ok(SalesSummary {
            products: per_product.into_values().collect(),
            total_sales,
            total_revenue,
        })
    }
}
