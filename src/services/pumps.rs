use crate::{
    entities::{
        pump::{self, Entity as Pump},
        tank::Entity as Tank,
    },
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
pub struct CreatePumpInput {
    pub name: String,
    pub content: String,
    pub tank_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePumpInput {
    pub name: Option<String>,
    pub content: Option<String>,
    pub tank_id: Option<Uuid>,
}

/// Service for managing dispensing pumps
#[derive(Clone)]
pub struct PumpService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl PumpService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// A pump must point at an existing tank
    async fn ensure_tank_exists(&self, tank_id: Uuid) -> Result<(), ServiceError> {
        Tank::find_by_id(tank_id)
            .one(&*self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!("Tank {} does not exist", tank_id))
            })
    }

    /// Creates a new pump
    #[instrument(skip(self))]
    pub async fn create_pump(&self, input: CreatePumpInput) -> Result<pump::Model, ServiceError> {
        self.ensure_tank_exists(input.tank_id).await?;

        let id = Uuid::new_v4();
        let pump = pump::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            content: Set(input.content),
            tank_id: Set(input.tank_id),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let pump = pump.insert(&*self.db).await?;

        self.event_sender.send(Event::PumpCreated(id)).await;
        info!("Pump created: {}", id);

        Ok(pump)
    }

    /// Gets a pump by ID
    #[instrument(skip(self))]
    pub async fn get_pump(&self, id: Uuid) -> Result<pump::Model, ServiceError> {
        Pump::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Pump {} not found", id)))
    }

    /// Updates an existing pump
    #[instrument(skip(self))]
    pub async fn update_pump(
        &self,
        id: Uuid,
        input: UpdatePumpInput,
    ) -> Result<pump::Model, ServiceError> {
        if let Some(tank_id) = input.tank_id {
            self.ensure_tank_exists(tank_id).await?;
        }

        let pump = self.get_pump(id).await?;
        let mut pump: pump::ActiveModel = pump.into();

        if let Some(name) = input.name {
            pump.name = Set(name);
        }
        if let Some(content) = input.content {
            pump.content = Set(content);
        }
        if let Some(tank_id) = input.tank_id {
            pump.tank_id = Set(tank_id);
        }
        pump.updated_at = Set(Some(Utc::now()));

        let pump = pump.update(&*self.db).await?;

        self.event_sender.send(Event::PumpUpdated(id)).await;

        Ok(pump)
    }

    /// Deletes a pump
    #[instrument(skip(self))]
    pub async fn delete_pump(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Pump::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Pump {} not found", id)));
        }

        self.event_sender.send(Event::PumpDeleted(id)).await;
        info!("Pump deleted: {}", id);

        Ok(())
    }

    /// Lists pumps with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_pumps(&self, query: &ListQuery) -> Result<Vec<pump::Model>, ServiceError> {
        let mut find = Pump::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(pump::Column::Name.contains(term))
                    .add(pump::Column::Content.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("name") => pump::Column::Name,
            Some("content") => pump::Column::Content,
            _ => pump::Column::CreatedAt,
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
