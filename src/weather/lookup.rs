use crate::{
    config, info,
    resolver::WeatherSource,
    types::{WeatherBucket, WeatherResponse},
    utils,
    weather::classify,
    warning,
};

/// OpenWeather-backed implementation of the [`WeatherSource`] seam.
///
/// Stateless; every call issues at most one GET against the configured
/// current-weather endpoint. All failure paths resolve to
/// `WeatherBucket::Clear` so the recommendation pipeline never sees an
/// error from here.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenWeather;

impl OpenWeather {
    pub fn new() -> Self {
        OpenWeather
    }
}

impl WeatherSource for OpenWeather {
    async fn resolve_bucket(&self, city: Option<&str>) -> WeatherBucket {
        current_bucket(city).await
    }
}

/// Resolves the current weather bucket for a city.
///
/// The target city is the caller-supplied one, else the configured
/// `OPENWEATHER_CITY`, else "Helsinki,FI". Without an API key the lookup
/// short-circuits to Clear; this is a degraded condition, not an error.
///
/// # Upstream contract
///
/// Expects a JSON body with a `weather` list whose first entry carries the
/// primary condition label in `main`. An absent list is read as "Clear".
/// Non-success status, transport errors and malformed bodies all degrade
/// to Clear with a warning.
pub async fn current_bucket(city: Option<&str>) -> WeatherBucket {
    let city = city
        .map(str::to_string)
        .or_else(config::openweather_city)
        .unwrap_or_else(|| "Helsinki,FI".to_string());

    let Some(api_key) = config::openweather_api_key() else {
        warning!("OPENWEATHER_API_KEY missing, defaulting to Clear.");
        return WeatherBucket::Clear;
    };

    let client = utils::http_client();
    let response = client
        .get(config::openweather_api_url())
        .query(&[
            ("q", city.as_str()),
            ("units", "metric"),
            ("appid", api_key.as_str()),
        ])
        .send()
        .await;

    let response = match response {
        Ok(resp) => resp,
        Err(e) => {
            warning!("OpenWeather request failed: {}", e);
            return WeatherBucket::Clear;
        }
    };

    if !response.status().is_success() {
        warning!("OpenWeather status: {}", response.status());
        return WeatherBucket::Clear;
    }

    let body = match response.json::<WeatherResponse>().await {
        Ok(body) => body,
        Err(e) => {
            warning!("OpenWeather body parse failed: {}", e);
            return WeatherBucket::Clear;
        }
    };

    let main = body
        .weather
        .first()
        .map(|c| c.main.as_str())
        .unwrap_or("Clear");
    let bucket = classify(main);
    info!("OpenWeather city: {} main: {} => bucket: {}", city, main, bucket);

    bucket
}
