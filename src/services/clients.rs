use crate::{
    entities::client::{self, Entity as Client},
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
pub struct CreateClientInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClientInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Service for managing clients
#[derive(Clone)]
pub struct ClientService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl ClientService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Creates a new client. The phone number must not belong to another
    /// client already.
    #[instrument(skip(self))]
    pub async fn create_client(
        &self,
        input: CreateClientInput,
    ) -> Result<client::Model, ServiceError> {
        let existing = Client::find()
            .filter(client::Column::Phone.eq(&input.phone))
            .one(&*self.db)
            .await?;

        if existing.is_some() {
            return Err(ServiceError::Conflict(
                "A client with this phone number already exists".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        let client = client::ActiveModel {
            id: Set(id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            phone: Set(input.phone),
            email: Set(input.email),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let client = client.insert(&*self.db).await?;

        self.event_sender.send(Event::ClientCreated(id)).await;
        info!("Client created: {}", id);

        Ok(client)
    }

    /// Gets a client by ID
    #[instrument(skip(self))]
    pub async fn get_client(&self, id: Uuid) -> Result<client::Model, ServiceError> {
        Client::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Client {} not found", id)))
    }

    /// Updates an existing client
    #[instrument(skip(self))]
    pub async fn update_client(
        &self,
        id: Uuid,
        input: UpdateClientInput,
    ) -> Result<client::Model, ServiceError> {
        if let Some(phone) = &input.phone {
            let taken = Client::find()
                .filter(client::Column::Phone.eq(phone))
                .filter(client::Column::Id.ne(id))
                .one(&*self.db)
                .await?;
            if taken.is_some() {
                return Err(ServiceError::Conflict(
                    "A client with this phone number already exists".to_string(),
                ));
            }
        }

        let client = self.get_client(id).await?;
        let mut client: client::ActiveModel = client.into();

        if let Some(first_name) = input.first_name {
            client.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            client.last_name = Set(last_name);
        }
        if let Some(phone) = input.phone {
            client.phone = Set(phone);
        }
        if let Some(email) = input.email {
            client.email = Set(email);
        }
        client.updated_at = Set(Some(Utc::now()));

        let client = client.update(&*self.db).await?;

        self.event_sender.send(Event::ClientUpdated(id)).await;

        Ok(client)
    }

    /// Deletes a client
    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Client::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Client {} not found", id)));
        }

        self.event_sender.send(Event::ClientDeleted(id)).await;
        info!("Client deleted: {}", id);

        Ok(())
    }

    /// Lists clients with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_clients(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<client::Model>, ServiceError> {
        let mut find = Client::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(client::Column::FirstName.contains(term))
                    .add(client::Column::LastName.contains(term))
                    .add(client::Column::Phone.contains(term))
                    .add(client::Column::Email.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("first_name") => client::Column::FirstName,
            Some("last_name") => client::Column::LastName,
            Some("phone") => client::Column::Phone,
            Some("email") => client::Column::Email,
            _ => client::Column::CreatedAt,
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
