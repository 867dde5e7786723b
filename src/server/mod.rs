//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the catalog, including
//! API endpoints, business logic, data access, and infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, extractors, and DTO conversion
//! - **Service Layer** (`service/`) - Units of work and store-error translation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, paging types, parameters and validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Response post-processing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, paging limits)
//! - **Startup** (`startup`) - Tracing, database, demo data, CORS and shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Extractors** parse paging parameters and validate JSON bodies
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** opens a transaction for writes and calls repositories
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** translates store failures into `NotFound` or `DatabaseIntegrity`
//! 7. **Controller** converts domain model to DTO, returns HTTP response
//! 8. **Middleware** stamps the request path into error bodies

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
