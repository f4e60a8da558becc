//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod remote_key;
