//! Client domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::client::ClientDto,
    server::{model::page::SortField, util::parse::digits_only},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    /// Brazilian taxpayer number, stored as 11 digits without punctuation.
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDate,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cpf: entity.cpf,
            income: entity.income,
            birth_date: entity.birth_date,
        }
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: Some(self.id),
            name: self.name,
            cpf: self.cpf,
            income: self.income,
            birth_date: self.birth_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientParams {
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: NaiveDate,
}

impl ClientParams {
    /// Converts a validated DTO, normalizing the CPF to digits only.
    pub fn from_dto(dto: ClientDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            cpf: digits_only(&dto.cpf),
            income: dto.income,
            birth_date: dto.birth_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientSortField {
    Id,
    Name,
    Cpf,
    Income,
    BirthDate,
}

impl SortField for ClientSortField {
    fn parse(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "cpf" => Some(Self::Cpf),
            "income" => Some(Self::Income),
            "birthDate" => Some(Self::BirthDate),
            _ => None,
        }
    }

    fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::Income => "income",
            Self::BirthDate => "birthDate",
        }
    }
}
