use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role held by an employee, mirroring the dashboard roles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "gerant")]
    Gerant,
    #[sea_orm(string_value = "pompiste")]
    Pompiste,
}

/// Employee (employé)
///
/// The password is stored as an argon2 hash; the plaintext never reaches
/// the database. Employees are records managed by the admin screens, not
/// login principals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,

    /// Age in years, derived from the birth date at save time
    pub age: i32,

    pub email: String,
    pub marital_status: String,
    pub phone: String,
    pub bank_account: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub nationality: String,

    /// Registration number (matricule), generated from the last name
    pub registration_number: String,

    pub position: Position,
    pub national_id: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
