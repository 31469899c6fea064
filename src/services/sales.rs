use crate::{
    entities::sale::{self, Entity as Sale},
    errors::ServiceError,
    events::{Event, EventSender},
    ListQuery,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateSaleInput {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub product: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSaleInput {
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
}

/// Sale total: quantity x unit price, plus tax
pub fn compute_sale_total(quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> Decimal {
    let subtotal = quantity * unit_price;
    subtotal + subtotal * tax_rate
}

/// Service for recording pump sales
#[derive(Clone)]
pub struct SaleService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    tax_rate: Decimal,
}

impl SaleService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: Arc<EventSender>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            db,
            event_sender,
            tax_rate,
        }
    }

    /// Records a sale. The total is derived server-side from quantity,
    /// unit price and the configured tax rate.
    #[instrument(skip(self))]
    pub async fn create_sale(&self, input: CreateSaleInput) -> Result<sale::Model, ServiceError> {
        let id = Uuid::new_v4();
        let total = compute_sale_total(input.quantity, input.unit_price, self.tax_rate);

        let sale = sale::ActiveModel {
            id: Set(id),
            client_name: Set(input.client_name),
            client_phone: Set(input.client_phone),
            client_email: Set(input.client_email),
            product: Set(input.product),
            category: Set(input.category),
            quantity: Set(input.quantity),
            unit_price: Set(input.unit_price),
            total: Set(total),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let sale = sale.insert(&*self.db).await?;

        self.event_sender.send(Event::SaleCreated(id)).await;
        info!("Sale recorded: {}", id);

        Ok(sale)
    }

    /// Gets a sale by ID
    #[instrument(skip(self))]
    pub async fn get_sale(&self, id: Uuid) -> Result<sale::Model, ServiceError> {
        Sale::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Sale {} not found", id)))
    }

    /// Updates a sale, recomputing the total from the effective quantity
    /// and unit price.
    #[instrument(skip(self))]
    pub async fn update_sale(
        &self,
        id: Uuid,
        input: UpdateSaleInput,
    ) -> Result<sale::Model, ServiceError> {
        let current = self.get_sale(id).await?;

        let quantity = input.quantity.unwrap_or(current.quantity);
        let unit_price = input.unit_price.unwrap_or(current.unit_price);

        let mut sale: sale::ActiveModel = current.into();

        if let Some(client_name) = input.client_name {
            sale.client_name = Set(client_name);
        }
        if let Some(client_phone) = input.client_phone {
            sale.client_phone = Set(client_phone);
        }
        if let Some(client_email) = input.client_email {
            sale.client_email = Set(client_email);
        }
        if let Some(product) = input.product {
            sale.product = Set(product);
        }
        if let Some(category) = input.category {
            sale.category = Set(category);
        }
        sale.quantity = Set(quantity);
        sale.unit_price = Set(unit_price);
        sale.total = Set(compute_sale_total(quantity, unit_price, self.tax_rate));
        sale.updated_at = Set(Some(Utc::now()));

        let sale = sale.update(&*self.db).await?;

        self.event_sender.send(Event::SaleUpdated(id)).await;

        Ok(sale)
    }

    /// Deletes a sale
    #[instrument(skip(self))]
    pub async fn delete_sale(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Sale::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Sale {} not found", id)));
        }

        self.event_sender.send(Event::SaleDeleted(id)).await;
        info!("Sale deleted: {}", id);

        Ok(())
    }

    /// Lists sales with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_sales(&self, query: &ListQuery) -> Result<Vec<sale::Model>, ServiceError> {
        let mut find = Sale::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(sale::Column::ClientName.contains(term))
                    .add(sale::Column::Product.contains(term))
                    .add(sale::Column::Category.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("client_name") => sale::Column::ClientName,
            Some("product") => sale::Column::Product,
            Some("quantity") => sale::Column::Quantity,
            Some("unit_price") => sale::Column::UnitPrice,
            Some("total") => sale::Column::Total,
            _ => sale::Column::CreatedAt,
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
    fn total_applies_the_tax_rate() {
        // 100 litres at 500 each, 18% tax: 50000 * 1.18 = 59000
        assert_eq!(
            compute_sale_total(dec!(100), dec!(500), dec!(0.18)),
            dec!(59000)
        );
    }

    #[test]
    fn zero_quantity_yields_zero_total() {
        assert_eq!(compute_sale_total(dec!(0), dec!(500), dec!(0.18)), dec!(0));
    }

    #[test]
    fn total_without_tax_is_the_subtotal() {
        assert_eq!(
            compute_sale_total(dec!(12), dec!(25), Decimal::ZERO),
            dec!(300)
        );
    }
}
