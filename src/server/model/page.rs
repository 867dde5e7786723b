//! Paging and sorting domain types.
//!
//! A `PageRequest` is parsed once at the controller boundary from the `page`, `size`
//! and repeatable `sort` query parameters, carried through the service layer, and
//! translated into `ORDER BY`/`LIMIT`/`OFFSET` by the repositories. A `Page` is the
//! repository's answer and is converted to a `PageDto` envelope for the API.

use crate::{
    model::page::{PageDto, SortDto},
    server::{config::PageDefaults, error::AppError, util::parse::parse_u64_param},
};

/// Direction of a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A resource's set of sortable properties.
///
/// Implemented by a small enum per paged resource so that an unknown property is
/// rejected while parsing the request instead of reaching the query builder.
pub trait SortField: Copy + Sized {
    /// Resolves the JSON property name used in `sort` query parameters.
    fn parse(property: &str) -> Option<Self>;

    /// JSON property name echoed back in the page envelope.
    fn property(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Requested page window and sort keys for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<F> {
    /// Zero-based page index.
    pub page: u64,
    /// Page length, always within `1..=max_size`.
    pub size: u64,
    /// Sort keys in priority order.
    pub sort: Vec<SortOrder<F>>,
}

impl<F: SortField> PageRequest<F> {
    pub fn new(page: u64, size: u64, sort: Vec<SortOrder<F>>) -> Self {
        Self { page, size, sort }
    }

    /// Row offset of the first element on this page.
    ///
    /// `None` when the offset overflows or exceeds what SQL `OFFSET` accepts; such a
    /// page lies past the end of any table.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.size)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }

    /// Builds a page request from raw query pairs.
    ///
    /// `page` defaults to 0 and `size` to the configured default. Every `sort` pair is
    /// `field[,field...][,asc|desc]`; when the last segment is a direction it applies to
    /// every field in that parameter, otherwise the fields sort ascending.
    ///
    /// # Arguments
    /// - `pairs` - Decoded query string pairs, in order of appearance
    /// - `defaults` - Configured default and maximum page sizes
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Parsed and bounds-checked request
    /// - `Err(AppError::BadRequest)` - Unparsable number, size out of range, or unknown
    ///   sort field
    pub fn from_query(pairs: &[(String, String)], defaults: &PageDefaults) -> Result<Self, AppError> {
        let mut page = 0;
        let mut size = defaults.default_size;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => page = parse_u64_param("page", value)?,
                "size" => size = parse_u64_param("size", value)?,
                "sort" => sort.extend(parse_sort::<F>(value)?),
                _ => {}
            }
        }

        if size == 0 || size > defaults.max_size {
            return Err(AppError::BadRequest(format!(
                "Page size must be between 1 and {}",
                defaults.max_size
            )));
        }

        Ok(Self { page, size, sort })
    }
}

fn parse_sort<F: SortField>(value: &str) -> Result<Vec<SortOrder<F>>, AppError> {
    let mut segments: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let direction = match segments.last().and_then(|s| SortDirection::parse(s)) {
        Some(direction) => {
            segments.pop();
            direction
        }
        None => SortDirection::Asc,
    };

    segments
        .into_iter()
        .map(|property| {
            F::parse(property)
                .map(|field| SortOrder { field, direction })
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort property: {}", property)))
        })
        .collect()
}

/// One page of results together with the totals of the whole listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub number: u64,
    pub size: u64,
    /// `(property, direction)` pairs that were applied, for the envelope.
    pub sort: Vec<(&'static str, SortDirection)>,
}

impl<T> Page<T> {
    pub fn new<F: SortField>(content: Vec<T>, total_elements: u64, request: &PageRequest<F>) -> Self {
        Self {
            content,
            total_elements,
            number: request.page,
            size: request.size,
            sort: request
                .sort
                .iter()
                .map(|order| (order.field.property(), order.direction))
                .collect(),
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.size)
        }
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Converts the content while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            number: self.number,
            size: self.size,
            sort: self.sort,
        }
    }

    /// Converts domain page to DTO envelope for API responses.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();
        let first = self.is_first();
        let last = self.is_last();
        let sort = self
            .sort
            .iter()
            .map(|(property, direction)| SortDto {
                property: property.to_string(),
                direction: direction.as_str().to_string(),
            })
            .collect();
        let content: Vec<D> = self.content.into_iter().map(f).collect();

        PageDto {
            total_elements: self.total_elements,
            total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: content.len() as u64,
            first,
            last,
            empty: content.is_empty(),
            sort,
            content,
        }
    }
}
