pub mod clients;
pub mod common;
pub mod employees;
pub mod feedback;
pub mod products;
pub mod pumps;
pub mod purchases;
pub mod reports;
pub mod restocks;
pub mod sales;
pub mod stations;
pub mod suppliers;
pub mod tanks;

use crate::db::DbPool;
use crate::events::EventSender;
use rust_decimal::Decimal;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub stations: Arc<crate::services::StationService>,
    pub tanks: Arc<crate::services::TankService>,
    pub pumps: Arc<crate::services::PumpService>,
    pub products: Arc<crate::services::ProductService>,
    pub suppliers: Arc<crate::services::SupplierService>,
    pub employees: Arc<crate::services::EmployeeService>,
    pub clients: Arc<crate::services::ClientService>,
    pub restocks: Arc<crate::services::RestockService>,
    pub sales: Arc<crate::services::SaleService>,
    pub purchases: Arc<crate::services::PurchaseService>,
    pub feedback: Arc<crate::services::FeedbackService>,
    pub reports: Arc<crate::services::ReportService>,
}

impl AppServices {
    /// Build the full service container over one pool and event channel
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>, tax_rate: Decimal) -> Self {
        Self {
            stations: Arc::new(crate::services::StationService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            tanks: Arc::new(crate::services::TankService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            pumps: Arc::new(crate::services::PumpService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            products: Arc::new(crate::services::ProductService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            suppliers: Arc::new(crate::services::SupplierService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            employees: Arc::new(crate::services::EmployeeService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            clients: Arc::new(crate::services::ClientService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            restocks: Arc::new(crate::services::RestockService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            sales: Arc::new(crate::services::SaleService::new(
                db_pool.clone(),
                event_sender.clone(),
                tax_rate,
            )),
            purchases: Arc::new(crate::services::PurchaseService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            feedback: Arc::new(crate::services::FeedbackService::new(
                db_pool.clone(),
                event_sender,
            )),
            reports: Arc::new(crate::services::ReportService::new(db_pool)),
        }
    }
}
