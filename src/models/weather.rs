//! Weather record model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};

use crate::ml::Features;

/// One row of the externally-maintained `weather` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
}

impl WeatherRecord {
    /// Exact-match lookup by city key (case-sensitive).
    pub async fn find_by_city(
        conn: &mut PgConnection,
        city: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, WeatherRecord>(
            "SELECT city, temperature, humidity, pressure, wind_speed FROM weather WHERE city = $1"
        )
        .bind(city)
        .fetch_optional(conn)
        .await
    }

    /// Feature vector in the order the scaler and classifier were fit with:
    /// temperature, humidity, pressure, wind_speed. Reordering these silently
    /// produces wrong predictions.
    pub fn features(&self) -> Features {
        [self.temperature, self.humidity, self.pressure, self.wind_speed]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::FEATURE_COUNT;

    #[test]
    fn feature_vector_preserves_training_order() {
        let record = WeatherRecord {
            city: "Pune".to_string(),
            temperature: 25.0,
            humidity: 80.0,
            pressure: 1005.0,
            wind_speed: 12.0,
        };

        assert_eq!(record.features(), [25.0, 80.0, 1005.0, 12.0]);
        assert_eq!(record.features().len(), FEATURE_COUNT);
    }
}
