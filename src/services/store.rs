//! Storage client for the `readings` table.
//!
//! Every operation is a single statement against the pool, committed
//! before it returns. Nothing is cached between calls.

use chrono::{DateTime, FixedOffset};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entity::readings;

/// Values for a reading that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub temperature: f64,
    pub humidity: f64,
    /// `None` leaves the column default (the database clock) in charge
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl NewReading {
    #[must_use]
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[derive(Clone)]
pub struct ReadingStore {
    db: DatabaseConnection,
}

impl ReadingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert one reading and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns the database error if the insert fails.
    pub async fn insert(&self, reading: NewReading) -> Result<i32, sea_orm::DbErr> {
        let model = readings::ActiveModel {
            id: NotSet,
            temperature: Set(reading.temperature),
            humidity: Set(reading.humidity),
            timestamp: reading.timestamp.map_or(NotSet, Set),
        };

        let result = readings::Entity::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id)
    }

    /// Every stored reading, in whatever order the database returns them.
    ///
    /// # Errors
    ///
    /// Returns the database error if the query fails.
    pub async fn list_all(&self) -> Result<Vec<readings::Model>, sea_orm::DbErr> {
        readings::Entity::find().all(&self.db).await
    }

    /// Every stored reading, oldest first.
    ///
    /// Equal timestamps fall back to insertion order so the last row is stable.
    ///
    /// # Errors
    ///
    /// Returns the database error if the query fails.
    pub async fn list_all_ordered_by_timestamp(
        &self,
    ) -> Result<Vec<readings::Model>, sea_orm::DbErr> {
        readings::Entity::find()
            .order_by_asc(readings::Column::Timestamp)
            .order_by_asc(readings::Column::Id)
            .all(&self.db)
            .await
    }
}
