//! Client fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::client;

/// Default test client name.
pub const DEFAULT_NAME: &str = "Maria Silva";

/// Default test client CPF (11 digits, unformatted).
pub const DEFAULT_CPF: &str = "12345678901";

/// Default test client income.
pub const DEFAULT_INCOME: f64 = 6500.0;

/// Default test client birth date (1994-07-20).
pub fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1994, 7, 20).unwrap()
}

/// Creates a client entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Maria Silva"`
/// - cpf: `"12345678901"`
/// - income: `6500.0`
/// - birth_date: `1994-07-20`
pub fn entity() -> client::Model {
    entity_builder().build()
}

/// Creates a client entity builder for customization.
pub fn entity_builder() -> ClientEntityBuilder {
    ClientEntityBuilder::default()
}

/// Builder for creating customized client entity models.
pub struct ClientEntityBuilder {
    id: i32,
    name: String,
    cpf: String,
    income: f64,
    birth_date: NaiveDate,
}

impl Default for ClientEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            cpf: DEFAULT_CPF.to_string(),
            income: DEFAULT_INCOME,
            birth_date: default_birth_date(),
        }
    }
}

impl ClientEntityBuilder {
    /// Sets the client ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the client name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the client CPF.
    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = cpf.into();
        self
    }

    /// Sets the client income.
    pub fn income(mut self, income: f64) -> Self {
        self.income = income;
        self
    }

    /// Sets the client birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Builds and returns the client entity model.
    pub fn build(self) -> client::Model {
        client::Model {
            id: self.id,
            name: self.name,
            cpf: self.cpf,
            income: self.income,
            birth_date: self.birth_date,
        }
    }
}
