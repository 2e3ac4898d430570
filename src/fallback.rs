//! Curated fallback playlists and search hints.
//!
//! The static table below guarantees that every request produces a usable
//! recommendation even when both upstream providers are unreachable: for
//! each of the three weather buckets all four moods are populated, and an
//! unknown mood degrades to the bucket's DeepFocus entry. The hint table
//! carries the search query used to enrich the baseline from the live
//! catalog.

use crate::types::{FallbackEntry, WeatherBucket};

/// Looks up the curated entry for a (bucket, mood) pair.
///
/// Total function: a mood that is not one of DeepFocus, LightCoding,
/// Motivation or FeelGood resolves to the bucket's DeepFocus entry, so
/// the returned name and url are always non-empty.
pub fn lookup(bucket: WeatherBucket, mood: &str) -> FallbackEntry {
    match bucket {
        WeatherBucket::Clear => match mood {
            "LightCoding" => FallbackEntry {
                name: "Sunny Light Coding",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX9sIqqvKsjG8",
                note: "Kevyttä koodailua hyvällä fiiliksellä.",
            },
            "Motivation" => FallbackEntry {
                name: "Sunny Motivation",
                url: "https://open.spotify.com/playlist/37i9dQZF1DXa2SPUyWl8Y5",
                note: "Energiaa ja boostia hyvään päivään.",
            },
            "FeelGood" => FallbackEntry {
                name: "Sunny Feel Good",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX3rxVfibe1L0",
                note: "Hyvän mielen kappaleita aurinkoisiin hetkiin.",
            },
            _ => FallbackEntry {
                name: "Sunny Deep Focus",
                url: "https://open.spotify.com/playlist/37i9dQZF1DWZeKCadgRdKQ",
                note: "Aurinkoista, kirkasta ja keskittynyttä koodausta varten.",
            },
        },
        WeatherBucket::Rain => match mood {
            "LightCoding" => FallbackEntry {
                name: "Rainy Light Coding",
                url: "https://open.spotify.com/playlist/37i9dQZF1DWZu0D7Y8cY0P",
                note: "Rauhallista taustamusiikkia tihkusateeseen.",
            },
            "Motivation" => FallbackEntry {
                name: "Rainy Motivation",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX1g0iEXLFycr",
                note: "Kun sataa ja pitäisi silti saada asioita tehtyä.",
            },
            "FeelGood" => FallbackEntry {
                name: "Rainy Feel Good",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX3YSRoSdA634",
                note: "Nosta fiilistä harmaan sään keskellä.",
            },
            _ => FallbackEntry {
                name: "Rainy Deep Focus",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX4sWSpwq3LiO",
                note: "Sadepäivän syväkeskitykseen, lo-fi ja ambient.",
            },
        },
        WeatherBucket::Clouds => match mood {
            "LightCoding" => FallbackEntry {
                name: "Cloudy Light Coding",
                url: "https://open.spotify.com/playlist/37i9dQZF1DX8Uebhn9wzrS",
                note: "Koodailuun, kun fiilis on neutraali mutta tekemistä riittää.",
            },
            "Motivation" => FallbackEntry {
                name: "Cloudy Motivation",
                url: "https://open.spotify.com/playlist/37i9dQZF1DXcCnTAt8CfNe",
                note: "Pientä potkua pilviseen päivään.",
            },
            "FeelGood" => FallbackEntry {
                name: "Cloudy Feel Good",
                url: "https://open.spotify.com/playlist/37i9dQZF1DXdPec7aLTmlC",
                note: "Hyvän mielen poppia pilvisellekin päivälle.",
            },
            _ => FallbackEntry {
                name: "Cloudy Deep Focus",
                url: "https://open.spotify.com/playlist/37i9dQZF1DWXRqgorJj26U",
                note: "Pilviselle päivälle tasainen fokustila.",
            },
        },
    }
}

/// Returns the curated catalog search hint for a (bucket, mood) pair.
///
/// `None` for unknown moods; the resolver then synthesizes a query from
/// the mood and bucket instead.
pub fn query_hint(bucket: WeatherBucket, mood: &str) -> Option<&'static str> {
    let hint = match bucket {
        WeatherBucket::Clear => match mood {
            "DeepFocus" => "deep focus coding sunny",
            "LightCoding" => "uplifting coding playlist",
            "Motivation" => "motivational programming songs",
            "FeelGood" => "feel good coding music",
            _ => return None,
        },
        WeatherBucket::Rain => match mood {
            "DeepFocus" => "lofi rain coding focus",
            "LightCoding" => "rainy day programming chill",
            "Motivation" => "rainy day motivation coding",
            "FeelGood" => "rainy day feel good songs",
            _ => return None,
        },
        WeatherBucket::Clouds => match mood {
            "DeepFocus" => "ambient cloudy day focus",
            "LightCoding" => "cloudy day coding playlist",
            "Motivation" => "cloudy day motivation music",
            "FeelGood" => "cloudy feel good pop",
            _ => return None,
        },
    };
    Some(hint)
}
