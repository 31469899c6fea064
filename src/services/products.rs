use crate::{
    entities::product::{self, Entity as Product},
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
pub struct CreateProductInput {
    pub designation: String,
    pub pump_price: Decimal,
    pub category: String,
    pub wholesale_unit: String,
    pub retail_unit: String,
    pub capacity: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub designation: Option<String>,
    pub pump_price: Option<Decimal>,
    pub category: Option<String>,
    pub wholesale_unit: Option<String>,
    pub retail_unit: Option<String>,
    pub capacity: Option<Decimal>,
}

/// Service for managing products
#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new product
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<product::Model, ServiceError> {
        let id = Uuid::new_v4();

        let product = product::ActiveModel {
            id: Set(id),
            designation: Set(input.designation),
            pump_price: Set(input.pump_price),
            category: Set(input.category),
            wholesale_unit: Set(input.wholesale_unit),
            retail_unit: Set(input.retail_unit),
            capacity: Set(input.capacity),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let product = product.insert(&*self.db).await?;

        self.event_sender.send(Event::ProductCreated(id)).await;
        info!("Product created: {}", id);

        Ok(product)
    }

    /// Gets a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> Result<product::Model, ServiceError> {
        Product::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    /// Updates an existing product
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<product::Model, ServiceError> {
        let product = self.get_product(id).await?;
        let mut product: product::ActiveModel = product.into();

        if let Some(designation) = input.designation {
            product.designation = Set(designation);
        }
        if let Some(pump_price) = input.pump_price {
            product.pump_price = Set(pump_price);
        }
        if let Some(category) = input.category {
            product.category = Set(category);
        }
        if let Some(wholesale_unit) = input.wholesale_unit {
            product.wholesale_unit = Set(wholesale_unit);
        }
        if let Some(retail_unit) = input.retail_unit {
            product.retail_unit = Set(retail_unit);
        }
        if let Some(capacity) = input.capacity {
            product.capacity = Set(capacity);
        }

        let product = product.update(&*self.db).await?;

        self.event_sender.send(Event::ProductUpdated(id)).await;

        Ok(product)
    }

    /// Deletes a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Product::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Product {} not found", id)));
        }

        self.event_sender.send(Event::ProductDeleted(id)).await;
        info!("Product deleted: {}", id);

        Ok(())
    }

    /// Lists products with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let mut find = Product::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(product::Column::Designation.contains(term))
                    .add(product::Column::Category.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("designation") => product::Column::Designation,
            Some("pump_price") => product::Column::PumpPrice,
            Some("category") => product::Column::Category,
            Some("capacity") => product::Column::Capacity,
            _ => product::Column::CreatedAt,
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

    /// Distinct category names, for the supplier and restock forms
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, ServiceError> {
        let products = Product::find()
            .order_by(product::Column::Category, Order::Asc)
            .all(&*self.db)
            .await?;

        let mut categories: Vec<String> = products.into_iter().map(|p| p.category).collect();
        categories.dedup();

        Ok(categories)
    }
}
