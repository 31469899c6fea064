use crate::{
    entities::restock::{self, Entity as Restock},
    errors::ServiceError,
    events::{Event, EventSender},
    ListQuery,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateRestockInput {
    pub date: NaiveDate,
    pub supplier: String,
    pub category: String,
    pub product: String,
    pub stock_before: Decimal,
    pub stock_incoming: Decimal,
    pub blend: Decimal,
    pub tank_location: String,
    pub amount_paid: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRestockInput {
    pub date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub product: Option<String>,
    pub stock_before: Option<Decimal>,
    pub stock_incoming: Option<Decimal>,
    pub blend: Option<Decimal>,
    pub tank_location: Option<String>,
    pub amount_paid: Option<Decimal>,
}

/// Total stock after a delivery: stock on hand plus the incoming volume
pub fn compute_stock_total(stock_before: Decimal, stock_incoming: Decimal) -> Decimal {
    stock_before + stock_incoming
}

/// Service for managing restocking events
#[derive(Clone)]
pub struct RestockService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl RestockService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a restocking event. The total stock is derived server-side
    /// and the delivery date may not lie in the past.
    #[instrument(skip(self))]
    pub async fn create_restock(
        &self,
        input: CreateRestockInput,
    ) -> Result<restock::Model, ServiceError> {
        if input.date < Utc::now().date_naive() {
            return Err(ServiceError::ValidationError(
                "Restock date cannot be in the past".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let stock_total = compute_stock_total(input.stock_before, input.stock_incoming);

        let restock = restock::ActiveModel {
            id: Set(id),
            date: Set(input.date),
            supplier: Set(input.supplier),
            category: Set(input.category),
            product: Set(input.product),
            stock_before: Set(input.stock_before),
            stock_incoming: Set(input.stock_incoming),
            blend: Set(input.blend),
            stock_total: Set(stock_total),
            tank_location: Set(input.tank_location),
            amount_paid: Set(input.amount_paid),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let restock = restock.insert(&*self.db).await?;

        self.event_sender.send(Event::RestockCreated(id)).await;
        info!("Restock created: {}", id);

        Ok(restock)
    }

    /// Gets a restocking event by ID
    #[instrument(skip(self))]
    pub async fn get_restock(&self, id: Uuid) -> Result<restock::Model, ServiceError> {
        Restock::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Restock {} not found", id)))
    }

    /// Updates a restocking event, recomputing the total stock from the
    /// effective stock figures.
    #[instrument(skip(self))]
    pub async fn update_restock(
        &self,
        id: Uuid,
        input: UpdateRestockInput,
    ) -> Result<restock::Model, ServiceError> {
        let current = self.get_restock(id).await?;

        let stock_before = input.stock_before.unwrap_or(current.stock_before);
        let stock_incoming = input.stock_incoming.unwrap_or(current.stock_incoming);

        let mut restock: restock::ActiveModel = current.into();

        if let Some(date) = input.date {
            restock.date = Set(date);
        }
        if let Some(supplier) = input.supplier {
            restock.supplier = Set(supplier);
        }
        if let Some(category) = input.category {
            restock.category = Set(category);
        }
        if let Some(product) = input.product {
            restock.product = Set(product);
        }
        if let Some(blend) = input.blend {
            restock.blend = Set(blend);
        }
        if let Some(tank_location) = input.tank_location {
            restock.tank_location = Set(tank_location);
        }
        if let Some(amount_paid) = input.amount_paid {
            restock.amount_paid = Set(amount_paid);
        }
        restock.stock_before = Set(stock_before);
        restock.stock_incoming = Set(stock_incoming);
        restock.stock_total = Set(compute_stock_total(stock_before, stock_incoming));
        restock.updated_at = Set(Some(Utc::now()));

        let restock = restock.update(&*self.db).await?;

        self.event_sender.send(Event::RestockUpdated(id)).await;

        Ok(restock)
    }

    /// Deletes a restocking event
    #[instrument(skip(self))]
    pub async fn delete_restock(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Restock::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Restock {} not found", id)));
        }

        self.event_sender.send(Event::RestockDeleted(id)).await;
        info!("Restock deleted: {}", id);

        Ok(())
    }

    /// Lists restocking events with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_restocks(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<restock::Model>, ServiceError> {
        let mut find = Restock::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(restock::Column::Supplier.contains(term))
                    .add(restock::Column::Category.contains(term))
                    .add(restock::Column::Product.contains(term))
                    .add(restock::Column::TankLocation.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("date") => restock::Column::Date,
            Some("supplier") => restock::Column::Supplier,
            Some("product") => restock::Column::Product,
            Some("stock_total") => restock::Column::StockTotal,
            Some("amount_paid") => restock::Column::AmountPaid,
            _ => restock::Column::CreatedAt,
        };
        let order = if query.descending() {
            Order::Desc
        } else {
            Order::Asc
        };

        find.order_by(column, order)
            .limit(query.per_page)
            .offset(query.offset())
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stock_total_is_sum_of_prior_and_incoming() {
        assert_eq!(compute_stock_total(dec!(1500), dec!(2500)), dec!(4000));
        assert_eq!(compute_stock_total(dec!(0), dec!(0)), dec!(0));
        assert_eq!(compute_stock_total(dec!(120.5), dec!(79.5)), dec!(200));
    }
}
