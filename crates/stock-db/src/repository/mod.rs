//! # Repository Module
//!
//! Store implementations for Stockroom.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MenuController                                                        │
//! │       │                                                                 │
//! │       │  db.products().add(&new_product)                               │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── exists(&self, id)                                                 │
//! │  ├── add(&self, product)                                               │
//! │  ├── list(&self)                                                       │
//! │  ├── update_field(&self, id, update)                                   │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (table `produtos`)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All SQL lives here; callers only see typed results.

pub mod product;
