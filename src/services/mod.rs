// Core services, one per dashboard entity group
pub mod clients;
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

pub use clients::ClientService;
pub use employees::EmployeeService;
pub use feedback::FeedbackService;
pub use products::ProductService;
pub use pumps::PumpService;
pub use purchases::PurchaseService;
pub use reports::ReportService;
pub use restocks::RestockService;
pub use sales::SaleService;
pub use stations::StationService;
pub use suppliers::SupplierService;
pub use tanks::TankService;
