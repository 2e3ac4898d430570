use crate::types::WeatherBucket;

/// Maps a raw weather-condition string to a [`WeatherBucket`].
///
/// Case-insensitive substring matching in priority order: rain, drizzle
/// and thunder conditions win over cloud conditions; snow counts as
/// clouds for playlist purposes. Everything else, including an empty
/// string, is treated as clear weather.
///
/// Total function over all strings, no side effects.
///
/// # Example
///
/// ```
/// assert_eq!(classify("light drizzle"), WeatherBucket::Rain);
/// assert_eq!(classify("Snow"), WeatherBucket::Clouds);
/// assert_eq!(classify(""), WeatherBucket::Clear);
/// ```
pub fn classify(condition: &str) -> WeatherBucket {
    let c = condition.to_lowercase();

    if c.contains("rain") || c.contains("drizzle") || c.contains("thunder") {
        return WeatherBucket::Rain;
    }
    if c.contains("cloud") || c.contains("snow") {
        return WeatherBucket::Clouds;
    }
    WeatherBucket::Clear
}
