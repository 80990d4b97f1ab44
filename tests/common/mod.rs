//! Shared entities and fixtures for integration tests

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use filterkit::FilterEntity;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, FilterEntity)]
#[table_name = "people"]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub rating: Option<Decimal>,
    pub score: Option<i32>,
    pub favorite_date_time_offset: Option<DateTime<FixedOffset>>,
}

impl Person {
    pub fn new(id: i32, first_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            rating: None,
            score: None,
            favorite_date_time_offset: None,
        }
    }

    pub fn rating(mut self, rating: Decimal) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn favorite(mut self, rfc3339: &str) -> Self {
        self.favorite_date_time_offset = Some(offset(rfc3339));
        self
    }
}

pub fn offset(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

pub fn ids(rows: Vec<&Person>) -> Vec<i32> {
    rows.into_iter().map(|p| p.id).collect()
}
