use crate::{
    entities::supplier::{self, Entity as Supplier},
    errors::ServiceError,
    events::{Event, EventSender},
    ListQuery,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateSupplierInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub category: String,
    pub delivery_frequency: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSupplierInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub delivery_frequency: Option<String>,
}

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl SupplierService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new supplier
    #[instrument(skip(self))]
    pub async fn create_supplier(
        &self,
        input: CreateSupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let id = Uuid::new_v4();

        let supplier = supplier::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            address: Set(input.address),
            phone: Set(input.phone),
            email: Set(input.email),
            category: Set(input.category),
            delivery_frequency: Set(input.delivery_frequency),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let supplier = supplier.insert(&*self.db).await?;

        self.event_sender.send(Event::SupplierCreated(id)).await;
        info!("Supplier created: {}", id);

        Ok(supplier)
    }

    /// Gets a supplier by ID
    #[instrument(skip(self))]
    pub async fn get_supplier(&self, id: Uuid) -> Result<supplier::Model, ServiceError> {
        Supplier::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier {} not found", id)))
    }

    /// Updates an existing supplier
    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        id: Uuid,
        input: UpdateSupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let supplier = self.get_supplier(id).await?;
        let mut supplier: supplier::ActiveModel = supplier.into();

        if let Some(name) = input.name {
            supplier.name = Set(name);
        }
        if let Some(address) = input.address {
            supplier.address = Set(address);
        }
        if let Some(phone) = input.phone {
            supplier.phone = Set(phone);
        }
        if let Some(email) = input.email {
            supplier.email = Set(email);
        }
        if let Some(category) = input.category {
            supplier.category = Set(category);
        }
        if let Some(delivery_frequency) = input.delivery_frequency {
            supplier.delivery_frequency = Set(delivery_frequency);
        }
        supplier.updated_at = Set(Some(Utc::now()));

        let supplier = supplier.update(&*self.db).await?;

        self.event_sender.send(Event::SupplierUpdated(id)).await;

        Ok(supplier)
    }

    /// Deletes a supplier
    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Supplier::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Supplier {} not found", id)));
        }

        self.event_sender.send(Event::SupplierDeleted(id)).await;
        info!("Supplier deleted: {}", id);

        Ok(())
    }

    /// Lists suppliers with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_suppliers(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<supplier::Model>, ServiceError> {
        let mut find = Supplier::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(supplier::Column::Name.contains(term))
                    .add(supplier::Column::Address.contains(term))
                    .add(supplier::Column::Phone.contains(term))
                    .add(supplier::Column::Email.contains(term))
                    .add(supplier::Column::Category.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("name") => supplier::Column::Name,
            Some("category") => supplier::Column::Category,
            Some("delivery_frequency") => supplier::Column::DeliveryFrequency,
            _ => supplier::Column::CreatedAt,
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

    /// Gets suppliers for one product category
    #[instrument(skip(self))]
    pub async fn get_suppliers_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<supplier::Model>, ServiceError> {
        Supplier::find()
            .filter(supplier::Column::Category.eq(category))
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}
