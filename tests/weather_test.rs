use devmood::types::WeatherBucket;
use devmood::weather::classify;

#[test]
fn test_rain_conditions_classify_as_rain() {
    // Priority set: rain, drizzle, thunder
    assert_eq!(classify("Rain"), WeatherBucket::Rain);
    assert_eq!(classify("light rain"), WeatherBucket::Rain);
    assert_eq!(classify("Drizzle"), WeatherBucket::Rain);
    assert_eq!(classify("THUNDERSTORM"), WeatherBucket::Rain);
    assert_eq!(classify("patchy light drizzle"), WeatherBucket::Rain);
}

#[test]
fn test_rain_wins_over_clouds() {
    // Both substrings present: the rain set has priority
    assert_eq!(classify("thundery clouds"), WeatherBucket::Rain);
    assert_eq!(classify("cloudy with rain"), WeatherBucket::Rain);
}

#[test]
fn test_cloud_and_snow_conditions_classify_as_clouds() {
    assert_eq!(classify("Clouds"), WeatherBucket::Clouds);
    assert_eq!(classify("scattered clouds"), WeatherBucket::Clouds);
    assert_eq!(classify("Snow"), WeatherBucket::Clouds);
    assert_eq!(classify("SNOW SHOWERS"), WeatherBucket::Clouds);
    assert_eq!(classify("OverCloud"), WeatherBucket::Clouds);
}

#[test]
fn test_everything_else_classifies_as_clear() {
    assert_eq!(classify("Clear"), WeatherBucket::Clear);
    assert_eq!(classify("Sunny"), WeatherBucket::Clear);
    assert_eq!(classify("Mist"), WeatherBucket::Clear);
    assert_eq!(classify("Haze"), WeatherBucket::Clear);
    assert_eq!(classify("Arctic"), WeatherBucket::Clear);
    assert_eq!(classify(""), WeatherBucket::Clear);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("rAiN"), classify("RAIN"));
    assert_eq!(classify("cLoUdS"), classify("clouds"));
    assert_eq!(classify("DRIZZLE"), WeatherBucket::Rain);
}
