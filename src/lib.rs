//! payguide: a terminal reference guide for payment platform products
//!
//! Product documentation is annotated against a glossary so that every known
//! term can be clicked to open a tooltip with its definition.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod glossary;
pub mod guide;
pub mod help;
pub mod layout;
pub mod scroll;
pub mod tooltip;
pub mod widgets;

#[cfg(test)]
mod test_utils;
