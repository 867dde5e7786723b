//! Field-level validation of incoming DTOs.
//!
//! Each write DTO reports every violated field at once so a client can fix a form in
//! one round trip. Violations become `AppError::Validation` (422) in the
//! `ValidatedJson` extractor.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    model::{
        api::FieldMessageDto,
        category::CategoryDto,
        client::ClientDto,
        product::ProductDto,
        user::{UserDto, UserInsertDto},
    },
    server::{error::AppError, util::parse::digits_only},
};

const REQUIRED: &str = "Required field";
const PASSWORD_MIN_LEN: usize = 8;

/// Input that can check its own field constraints.
pub trait Validate {
    /// Appends a message for every violated field.
    fn collect_errors(&self, errors: &mut FieldErrors);

    /// # Returns
    /// - `Ok(())` - All fields are valid
    /// - `Err(AppError::Validation)` - One entry per violated constraint
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::default();
        self.collect_errors(&mut errors);
        errors.into_result()
    }
}

#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldMessageDto>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldMessageDto::new(field, message));
    }

    /// Adds `message` for `field` when `valid` is false.
    pub fn check(&mut self, valid: bool, field: &str, message: &str) {
        if !valid {
            self.add(field, message);
        }
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0))
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Accepts `local@domain.tld` without whitespace.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl Validate for ProductDto {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        let name_len = self.name.trim().chars().count();
        errors.check(
            (3..=80).contains(&name_len),
            "name",
            "Name must be between 3 and 80 characters",
        );
        errors.check(!is_blank(&self.description), "description", REQUIRED);
        errors.check(self.price > Decimal::ZERO, "price", "Price must be positive");
        errors.check(
            self.date <= Utc::now(),
            "date",
            "Product date cannot be in the future",
        );
        errors.check(
            self.categories.iter().all(|c| c.id.is_some()),
            "categories",
            "Every category must reference an id",
        );
    }
}

impl Validate for CategoryDto {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.check(!is_blank(&self.name), "name", REQUIRED);
    }
}

impl Validate for ClientDto {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.check(!is_blank(&self.name), "name", REQUIRED);
        errors.check(
            digits_only(&self.cpf).len() == 11,
            "cpf",
            "CPF must contain 11 digits",
        );
        errors.check(
            self.income.is_finite() && self.income >= 0.0,
            "income",
            "Income cannot be negative",
        );
        errors.check(
            self.birth_date < Utc::now().date_naive(),
            "birthDate",
            "Birth date must be in the past",
        );
    }
}

impl Validate for UserDto {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.check(!is_blank(&self.name), "name", REQUIRED);
        errors.check(is_email(&self.email), "email", "Invalid email");
        errors.check(
            self.roles.iter().all(|r| r.id.is_some()),
            "roles",
            "Every role must reference an id",
        );
    }
}

impl Validate for UserInsertDto {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        self.user.collect_errors(errors);
        errors.check(
            self.password.chars().count() >= PASSWORD_MIN_LEN,
            "password",
            "Password must have at least 8 characters",
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::model::category::CategoryDto;

    fn product() -> ProductDto {
        ProductDto {
            id: None,
            name: "Phone".to_string(),
            description: "Good Phone".to_string(),
            price: Decimal::new(80000, 2),
            img_url: "https://img.com/img.png".to_string(),
            date: Utc::now() - Duration::days(1),
            categories: vec![CategoryDto {
                id: Some(2),
                name: String::new(),
            }],
        }
    }

    fn field_names(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors.into_iter().map(|e| e.field_name).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_product() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn reports_every_invalid_product_field() {
        let dto = ProductDto {
            name: "ab".to_string(),
            description: "  ".to_string(),
            price: Decimal::ZERO,
            date: Utc::now() + Duration::days(2),
            ..product()
        };

        assert_eq!(
            field_names(dto.validate()),
            vec!["name", "description", "price", "date"]
        );
    }

    #[test]
    fn client_cpf_ignores_punctuation() {
        let dto = ClientDto {
            id: None,
            name: "Maria Silva".to_string(),
            cpf: "123.456.789-01".to_string(),
            income: 6500.0,
            birth_date: NaiveDate::from_ymd_opt(1994, 7, 20).unwrap(),
        };

        assert!(dto.validate().is_ok());

        let short = ClientDto {
            cpf: "1234".to_string(),
            income: -1.0,
            ..dto
        };
        assert_eq!(field_names(short.validate()), vec!["cpf", "income"]);
    }

    #[test]
    fn user_insert_requires_email_and_password() {
        let dto = UserInsertDto {
            user: UserDto {
                id: None,
                name: "Alex".to_string(),
                email: "alex.gmail.com".to_string(),
                roles: Vec::new(),
            },
            password: "short".to_string(),
        };

        assert_eq!(field_names(dto.validate()), vec!["email", "password"]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("alex@gmail.com"));
        assert!(!is_email("alex@gmail"));
        assert!(!is_email("@gmail.com"));
        assert!(!is_email("al ex@gmail.com"));
        assert!(!is_email("a@b@c.com"));
    }
}
