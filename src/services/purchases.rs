use crate::{
    entities::purchase::{self, Entity as Purchase},
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
pub struct CreatePurchaseInput {
    pub supplier: String,
    pub category: String,
    pub product: String,
    pub price: Decimal,
    pub payment_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePurchaseInput {
    pub supplier: Option<String>,
    pub category: Option<String>,
    pub product: Option<String>,
    pub price: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
}

/// Service for managing purchase orders
#[derive(Clone)]
pub struct PurchaseService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl PurchaseService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new purchase
    #[instrument(skip(self))]
    pub async fn create_purchase(
        &self,
        input: CreatePurchaseInput,
    ) -> Result<purchase::Model, ServiceError> {
        let id = Uuid::new_v4();

        let purchase = purchase::ActiveModel {
            id: Set(id),
            supplier: Set(input.supplier),
            category: Set(input.category),
            product: Set(input.product),
            price: Set(input.price),
            payment_date: Set(input.payment_date),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let purchase = purchase.insert(&*self.db).await?;

        self.event_sender.send(Event::PurchaseCreated(id)).await;
        info!("Purchase created: {}", id);

        Ok(purchase)
    }

    /// Gets a purchase by ID
    #[instrument(skip(self))]
    pub async fn get_purchase(&self, id: Uuid) -> Result<purchase::Model, ServiceError> {
        Purchase::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Purchase {} not found", id)))
    }

    /// Updates an existing purchase
    #[instrument(skip(self))]
    pub async fn update_purchase(
        &self,
        id: Uuid,
        input: UpdatePurchaseInput,
    ) -> Result<purchase::Model, ServiceError> {
        let purchase = self.get_purchase(id).await?;
        let mut purchase: purchase::ActiveModel = purchase.into();

        if let Some(supplier) = input.supplier {
            purchase.supplier = Set(supplier);
        }
        if let Some(category) = input.category {
            purchase.category = Set(category);
        }
        if let Some(product) = input.product {
            purchase.product = Set(product);
        }
        if let Some(price) = input.price {
            purchase.price = Set(price);
        }
        if let Some(payment_date) = input.payment_date {
            purchase.payment_date = Set(payment_date);
        }
        purchase.updated_at = Set(Some(Utc::now()));

        let purchase = purchase.update(&*self.db).await?;

        self.event_sender.send(Event::PurchaseUpdated(id)).await;

        Ok(purchase)
    }

    /// Deletes a purchase
    #[instrument(skip(self))]
    pub async fn delete_purchase(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Purchase::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Purchase {} not found", id)));
        }

        self.event_sender.send(Event::PurchaseDeleted(id)).await;
        info!("Purchase deleted: {}", id);

        Ok(())
    }

    /// Lists purchases with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_purchases(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<purchase::Model>, ServiceError> {
        let mut find = Purchase::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(purchase::Column::Supplier.contains(term))
                    .add(purchase::Column::Category.contains(term))
                    .add(purchase::Column::Product.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("supplier") => purchase::Column::Supplier,
            Some("product") => purchase::Column::Product,
            Some("price") => purchase::Column::Price,
            Some("payment_date") => purchase::Column::PaymentDate,
            _ => purchase::Column::CreatedAt,
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
