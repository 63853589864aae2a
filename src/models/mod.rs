//! Data models for the book API

pub mod book;

pub use book::{Book, BookQuery, CreateBook};
