use devmood::fallback::{lookup, query_hint};
use devmood::types::WeatherBucket;
use devmood::weather::classify;

const BUCKETS: [WeatherBucket; 3] = [
    WeatherBucket::Clear,
    WeatherBucket::Rain,
    WeatherBucket::Clouds,
];

const MOODS: [&str; 4] = ["DeepFocus", "LightCoding", "Motivation", "FeelGood"];

#[test]
fn test_every_bucket_mood_pair_is_populated() {
    for bucket in BUCKETS {
        for mood in MOODS {
            let entry = lookup(bucket, mood);
            assert!(!entry.name.is_empty(), "{bucket}/{mood} name empty");
            assert!(!entry.url.is_empty(), "{bucket}/{mood} url empty");
            assert!(!entry.note.is_empty(), "{bucket}/{mood} note empty");
            assert!(entry.url.starts_with("https://open.spotify.com/playlist/"));
        }
    }
}

#[test]
fn test_entries_are_distinct_per_pair() {
    let mut urls = Vec::new();
    for bucket in BUCKETS {
        for mood in MOODS {
            urls.push(lookup(bucket, mood).url);
        }
    }
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 12);
}

#[test]
fn test_unknown_mood_degrades_to_deep_focus() {
    for bucket in BUCKETS {
        assert_eq!(lookup(bucket, "Unknown"), lookup(bucket, "DeepFocus"));
        assert_eq!(lookup(bucket, ""), lookup(bucket, "DeepFocus"));
    }
}

#[test]
fn test_unknown_bucket_string_degrades_to_clear() {
    // An unrecognized condition classifies to Clear, so its fallback entry
    // is the Clear one.
    let entry = lookup(classify("Arctic"), "DeepFocus");
    assert_eq!(entry, lookup(WeatherBucket::Clear, "DeepFocus"));
}

#[test]
fn test_every_known_pair_has_a_query_hint() {
    for bucket in BUCKETS {
        for mood in MOODS {
            let hint = query_hint(bucket, mood);
            assert!(hint.is_some(), "missing hint for {bucket}/{mood}");
            assert!(!hint.unwrap().is_empty());
        }
    }
}

#[test]
fn test_unknown_mood_has_no_query_hint() {
    assert_eq!(query_hint(WeatherBucket::Rain, "Unknown"), None);
    assert_eq!(query_hint(WeatherBucket::Clear, ""), None);
}
