use crate::{
    entities::station::{self, Entity as Station},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SaveStationInput {
    pub designation: String,
    pub activities: String,
    pub fiscal_id: String,
    pub bank_account: String,
    pub commune: String,
    pub email: String,
    pub trade_register: String,
}

/// Service for the station profile. The profile is a single record: saving
/// it again overwrites the existing one.
#[derive(Clone)]
pub struct StationService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl StationService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Gets the station profile, if one has been saved
    #[instrument(skip(self))]
    pub async fn get_station(&self) -> Result<Option<station::Model>, ServiceError> {
        Station::find().one(&*self.db).await.map_err(Into::into)
    }

    /// Creates or replaces the station profile
    #[instrument(skip(self))]
    pub async fn save_station(
        &self,
        input: SaveStationInput,
    ) -> Result<station::Model, ServiceError> {
        let existing = self.get_station().await?;

        let station = match existing {
            Some(current) => {
                let id = current.id;
                let mut station: station::ActiveModel = current.into();
                station.designation = Set(input.designation);
                station.activities = Set(input.activities);
                station.fiscal_id = Set(input.fiscal_id);
                station.bank_account = Set(input.bank_account);
                station.commune = Set(input.commune);
                station.email = Set(input.email);
                station.trade_register = Set(input.trade_register);
                station.updated_at = Set(Some(Utc::now()));

                let station = station.update(&*self.db).await?;
                self.event_sender.send(Event::StationSaved(id)).await;
                station
            }
            None => {
                let id = Uuid::new_v4();
                let station = station::ActiveModel {
                    id: Set(id),
                    designation: Set(input.designation),
                    activities: Set(input.activities),
                    fiscal_id: Set(input.fiscal_id),
                    bank_account: Set(input.bank_account),
                    commune: Set(input.commune),
                    email: Set(input.email),
                    trade_register: Set(input.trade_register),
                    created_at: Set(Utc::now()),
                    updated_at: Set(None),
                };

                let station = station.insert(&*self.db).await?;
                self.event_sender.send(Event::StationSaved(id)).await;
                station
            }
        };

        info!("Station profile saved: {}", station.id);
        Ok(station)
    }
}
