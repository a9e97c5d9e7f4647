//! Recipe data source
//!
//! The app only needs two queries: "meals that use this ingredient" and
//! "full record for this meal id". They sit behind the [`MealSource`] trait
//! so the UI and tests can swap TheMealDB for an in-memory source.

use std::time::Duration;

use tracing::{debug, info};

use crate::config_file::AppConfig;
use crate::error::Result;
use crate::meal::{MealDetail, MealSummary, MealsEnvelope};

/// Anything that can answer recipe queries.
///
/// Implementations are called from background fetch threads, hence the
/// `Send + Sync` bound.
pub trait MealSource: Send + Sync {
    /// Meals that list `ingredient`. An empty list means "no results".
    fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>>;

    /// Full record for a meal id, or `None` if the id is unknown.
    fn lookup(&self, id: &str) -> Result<Option<MealDetail>>;
}

/// Blocking TheMealDB client.
pub struct MealDbClient {
    agent: ureq::Agent,
    base_url: String,
}

impl MealDbClient {
    /// Build a client from validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        Self {
            agent,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        param: &str,
    ) -> Result<MealsEnvelope<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} i={}", url, param);

        // query() takes care of URL-encoding the parameter
        let body = self.agent.get(&url).query("i", param).call()?.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl MealSource for MealDbClient {
    fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>> {
        let meals = self.get::<MealSummary>("filter.php", ingredient)?.into_meals();
        info!("Search for {:?} returned {} meals", ingredient, meals.len());
        Ok(meals)
    }

    fn lookup(&self, id: &str) -> Result<Option<MealDetail>> {
        let meal = self.get::<MealDetail>("lookup.php", id)?.into_meals().into_iter().next();
        if meal.is_none() {
            info!("Lookup for meal {} returned nothing", id);
        }
        Ok(meal)
    }
}
