use crate::{
    entities::tank::{self, Entity as Tank},
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
pub struct CreateTankInput {
    pub designation: String,
    pub name: String,
    pub stored_product: String,
    pub capacity: Decimal,
    pub purchase_price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTankInput {
    pub designation: Option<String>,
    pub name: Option<String>,
    pub stored_product: Option<String>,
    pub capacity: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
}

/// Service for managing storage tanks
#[derive(Clone)]
pub struct TankService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl TankService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new tank
    #[instrument(skip(self))]
    pub async fn create_tank(&self, input: CreateTankInput) -> Result<tank::Model, ServiceError> {
        let id = Uuid::new_v4();

        let tank = tank::ActiveModel {
            id: Set(id),
            designation: Set(input.designation),
            name: Set(input.name),
            stored_product: Set(input.stored_product),
            capacity: Set(input.capacity),
            purchase_price: Set(input.purchase_price),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let tank = tank.insert(&*self.db).await?;

        self.event_sender.send(Event::TankCreated(id)).await;
        info!("Tank created: {}", id);

        Ok(tank)
    }

    /// Gets a tank by ID
    #[instrument(skip(self))]
    pub async fn get_tank(&self, id: Uuid) -> Result<tank::Model, ServiceError> {
        Tank::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Tank {} not found", id)))
    }

    /// Updates an existing tank
    #[instrument(skip(self))]
    pub async fn update_tank(
        &self,
        id: Uuid,
        input: UpdateTankInput,
    ) -> Result<tank::Model, ServiceError> {
        let tank = self.get_tank(id).await?;
        let mut tank: tank::ActiveModel = tank.into();

        if let Some(designation) = input.designation {
            tank.designation = Set(designation);
        }
        if let Some(name) = input.name {
            tank.name = Set(name);
        }
        if let Some(stored_product) = input.stored_product {
            tank.stored_product = Set(stored_product);
        }
        if let Some(capacity) = input.capacity {
            tank.capacity = Set(capacity);
        }
        if let Some(purchase_price) = input.purchase_price {
            tank.purchase_price = Set(purchase_price);
        }
        tank.updated_at = Set(Some(Utc::now()));

        let tank = tank.update(&*self.db).await?;

        self.event_sender.send(Event::TankUpdated(id)).await;

        Ok(tank)
    }

    /// Deletes a tank; removes exactly the addressed row
    #[instrument(skip(self))]
    pub async fn delete_tank(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Tank::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Tank {} not found", id)));
        }

        self.event_sender.send(Event::TankDeleted(id)).await;
        info!("Tank deleted: {}", id);

        Ok(())
    }

    /// Lists tanks with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_tanks(&self, query: &ListQuery) -> Result<Vec<tank::Model>, ServiceError> {
        let mut find = Tank::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(tank::Column::Designation.contains(term))
                    .add(tank::Column::Name.contains(term))
                    .add(tank::Column::StoredProduct.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("designation") => tank::Column::Designation,
            Some("name") => tank::Column::Name,
            Some("stored_product") => tank::Column::StoredProduct,
            Some("capacity") => tank::Column::Capacity,
            Some("purchase_price") => tank::Column::PurchasePrice,
            _ => tank::Column::CreatedAt,
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
