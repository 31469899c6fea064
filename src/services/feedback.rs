use crate::{
    auth::Role,
    entities::feedback::{self, Entity as Feedback},
    errors::ServiceError,
    events::{Event, EventSender},
    ListQuery,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Service for attendant feedback messages
#[derive(Clone)]
pub struct FeedbackService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl FeedbackService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Records a feedback message from the given role
    #[instrument(skip(self, message))]
    pub async fn create_feedback(
        &self,
        author_role: Role,
        message: String,
    ) -> Result<feedback::Model, ServiceError> {
        let id = Uuid::new_v4();

        let feedback = feedback::ActiveModel {
            id: Set(id),
            author_role: Set(author_role.to_string()),
            message: Set(message),
            created_at: Set(Utc::now()),
        };

        let feedback = feedback.insert(&*self.db).await?;

        self.event_sender.send(Event::FeedbackCreated(id)).await;
        info!("Feedback recorded: {}", id);

        Ok(feedback)
    }

    /// Lists feedback messages, newest first by default
    #[instrument(skip(self))]
    pub async fn list_feedback(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<feedback::Model>, ServiceError> {
        let mut find = Feedback::find();

        if let Some(term) = query.search_term() {
            find = find.filter(feedback::Column::Message.contains(term));
        }

        find.order_by(feedback::Column::CreatedAt, Order::Desc)
            .limit(query.per_page)
            .offset(query.offset())
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}
