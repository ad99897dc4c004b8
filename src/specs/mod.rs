// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives on each page of the quotes site, as CSS selectors.
//! Nothing here touches the browser; the scrape layer feeds these selectors to a
//! [`Navigator`](crate::browser::Navigator).
//!
//! ## Pages
//! - `login` – the form on `/login`.
//! - `listing` – a page of quote cards, shared by the root listing and `/tag/<t>/`.
//! - `author` – an author detail page reached from a card's "(about)" link.
//!
//! ## Conventions
//! - Item-level selectors are relative to one `.quote` card.
//! - A selector that stops matching after a site change degrades to empty strings,
//!   so keep these in one place and keep them minimal.
pub mod author;
pub mod listing;
pub mod login;
