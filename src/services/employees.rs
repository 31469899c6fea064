use crate::{
    entities::employee::{self, Entity as Employee, Position},
    errors::ServiceError,
    events::{Event, EventSender},
    ListQuery,
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateEmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub marital_status: String,
    pub phone: String,
    pub bank_account: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub nationality: String,
    pub position: Position,
    pub national_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub marital_status: Option<String>,
    pub phone: Option<String>,
    pub bank_account: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<Position>,
    pub national_id: Option<String>,
    pub password: Option<String>,
}

/// Age in whole years at `today`
pub fn compute_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Registration number: first two letters of the last name, uppercased,
/// followed by three random digits
pub fn generate_registration_number(last_name: &str) -> String {
    let letters: String = last_name
        .chars()
        .filter(|c| c.is_alphabetic())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    let digits = rand::thread_rng().gen_range(100..1000);
    format!("{}{}", letters, digits)
}

/// Service for managing employees
#[derive(Clone)]
pub struct EmployeeService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl EmployeeService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::HashError(e.to_string()))
    }

    /// Creates a new employee. The registration number and age are derived
    /// server-side; the password is stored hashed.
    #[instrument(skip(self, input))]
    pub async fn create_employee(
        &self,
        input: CreateEmployeeInput,
    ) -> Result<employee::Model, ServiceError> {
        let id = Uuid::new_v4();
        let password_hash = self.hash_password(&input.password)?;
        let age = compute_age(input.birth_date, Utc::now().date_naive());
        let registration_number = generate_registration_number(&input.last_name);

        let employee = employee::ActiveModel {
            id: Set(id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            birth_date: Set(input.birth_date),
            age: Set(age),
            email: Set(input.email),
            marital_status: Set(input.marital_status),
            phone: Set(input.phone),
            bank_account: Set(input.bank_account),
            emergency_contact_name: Set(input.emergency_contact_name),
            emergency_contact_phone: Set(input.emergency_contact_phone),
            nationality: Set(input.nationality),
            registration_number: Set(registration_number),
            position: Set(input.position),
            national_id: Set(input.national_id),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let employee = employee.insert(&*self.db).await?;

        self.event_sender.send(Event::EmployeeCreated(id)).await;
        info!("Employee created: {}", id);

        Ok(employee)
    }

    /// Gets an employee by ID
    #[instrument(skip(self))]
    pub async fn get_employee(&self, id: Uuid) -> Result<employee::Model, ServiceError> {
        Employee::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Employee {} not found", id)))
    }

    /// Updates an existing employee. Changing the birth date refreshes the
    /// derived age; the registration number is never regenerated.
    #[instrument(skip(self, input))]
    pub async fn update_employee(
        &self,
        id: Uuid,
        input: UpdateEmployeeInput,
    ) -> Result<employee::Model, ServiceError> {
        let employee = self.get_employee(id).await?;
        let mut employee: employee::ActiveModel = employee.into();

        if let Some(first_name) = input.first_name {
            employee.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            employee.last_name = Set(last_name);
        }
        if let Some(birth_date) = input.birth_date {
            employee.birth_date = Set(birth_date);
            employee.age = Set(compute_age(birth_date, Utc::now().date_naive()));
        }
        if let Some(email) = input.email {
            employee.email = Set(email);
        }
        if let Some(marital_status) = input.marital_status {
            employee.marital_status = Set(marital_status);
        }
        if let Some(phone) = input.phone {
            employee.phone = Set(phone);
        }
        if let Some(bank_account) = input.bank_account {
            employee.bank_account = Set(bank_account);
        }
        if let Some(emergency_contact_name) = input.emergency_contact_name {
            employee.emergency_contact_name = Set(emergency_contact_name);
        }
        if let Some(emergency_contact_phone) = input.emergency_contact_phone {
            employee.emergency_contact_phone = Set(emergency_contact_phone);
        }
        if let Some(nationality) = input.nationality {
            employee.nationality = Set(nationality);
        }
        if let Some(position) = input.position {
            employee.position = Set(position);
        }
        if let Some(national_id) = input.national_id {
            employee.national_id = Set(national_id);
        }
        if let Some(password) = input.password {
            employee.password_hash = Set(self.hash_password(&password)?);
        }
        employee.updated_at = Set(Some(Utc::now()));

        let employee = employee.update(&*self.db).await?;

        self.event_sender.send(Event::EmployeeUpdated(id)).await;

        Ok(employee)
    }

    /// Deletes an employee
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = Employee::delete_by_id(id).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Employee {} not found", id)));
        }

        self.event_sender.send(Event::EmployeeDeleted(id)).await;
        info!("Employee deleted: {}", id);

        Ok(())
    }

    /// Lists employees with optional search and sorting
    #[instrument(skip(self))]
    pub async fn list_employees(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<employee::Model>, ServiceError> {
        let mut find = Employee::find();

        if let Some(term) = query.search_term() {
            find = find.filter(
                Condition::any()
                    .add(employee::Column::FirstName.contains(term))
                    .add(employee::Column::LastName.contains(term))
                    .add(employee::Column::Email.contains(term))
                    .add(employee::Column::RegistrationNumber.contains(term)),
            );
        }

        let column = match query.sort_by.as_deref() {
            Some("first_name") => employee::Column::FirstName,
            Some("last_name") => employee::Column::LastName,
            Some("age") => employee::Column::Age,
            Some("registration_number") => employee::Column::RegistrationNumber,
            _ => employee::Column::CreatedAt,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_accounts_for_birthday_not_yet_passed() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();

        let before_birthday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(compute_age(birth, before_birthday), 33);

        let on_birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(compute_age(birth, on_birthday), 34);

        let after_birthday = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(compute_age(birth, after_birthday), 34);
    }

    #[test]
    fn registration_number_shape() {
        let matricule = generate_registration_number("Dupont");
        assert_eq!(matricule.len(), 5);
        assert_eq!(&matricule[..2], "DU");
        assert!(matricule[2..].chars().all(|c| c.is_ascii_digit()));

        let digits: u32 = matricule[2..].parse().unwrap();
        assert!((100..1000).contains(&digits));
    }

    #[test]
    fn registration_number_skips_non_alphabetic_chars() {
        let matricule = generate_registration_number("d'Artagnan");
        assert_eq!(&matricule[..2], "DA");
    }
}
