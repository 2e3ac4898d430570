use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};

use devmood::types::{CatalogCredential, PlaylistOption, TOKEN_SAFETY_MARGIN_SECS};
use devmood::utils::{MAX_OPTIONS, encode_basic_credentials, sample_options};

fn option(name: &str) -> PlaylistOption {
    PlaylistOption {
        name: name.to_string(),
        url: format!("https://open.spotify.com/playlist/{name}"),
        image_src: None,
        owner: Some("tester".to_string()),
    }
}

#[test]
fn test_sample_options_returns_subset_of_correct_size() {
    let input: Vec<PlaylistOption> = (0..10).map(|i| option(&format!("pl{i}"))).collect();
    let input_urls: HashSet<String> = input.iter().map(|o| o.url.clone()).collect();

    let mut rng = StdRng::seed_from_u64(7);
    let sampled = sample_options(input, &mut rng);

    // Subset of the input of the right size; order is deliberately not
    // asserted, only membership.
    assert_eq!(sampled.len(), MAX_OPTIONS);
    for opt in &sampled {
        assert!(input_urls.contains(&opt.url));
    }

    let sampled_urls: HashSet<String> = sampled.iter().map(|o| o.url.clone()).collect();
    assert_eq!(sampled_urls.len(), MAX_OPTIONS, "sampling must not duplicate");
}

#[test]
fn test_sample_options_keeps_short_inputs_whole() {
    let input = vec![option("a"), option("b")];
    let mut rng = StdRng::seed_from_u64(1);
    let sampled = sample_options(input.clone(), &mut rng);

    assert_eq!(sampled.len(), 2);
    let names: HashSet<&str> = sampled.iter().map(|o| o.name.as_str()).collect();
    assert!(names.contains("a") && names.contains("b"));

    let empty = sample_options(Vec::new(), &mut rng);
    assert!(empty.is_empty());
}

#[test]
fn test_sample_options_is_deterministic_under_a_fixed_seed() {
    let input: Vec<PlaylistOption> = (0..10).map(|i| option(&format!("pl{i}"))).collect();

    let first = sample_options(input.clone(), &mut StdRng::seed_from_u64(42));
    let second = sample_options(input, &mut StdRng::seed_from_u64(42));

    assert_eq!(first, second);
}

#[test]
fn test_credential_freshness_boundary() {
    // Token fetched at T with lifetime L is fresh strictly before
    // T + L - margin and stale from that instant on.
    let obtained_at: u64 = 1_700_000_000;
    let lifetime: u64 = 3600;
    let credential = CatalogCredential {
        access_token: "token".to_string(),
        expires_at: obtained_at + lifetime,
    };

    let boundary = obtained_at + lifetime - TOKEN_SAFETY_MARGIN_SECS;
    assert!(credential.is_fresh(obtained_at));
    assert!(credential.is_fresh(boundary - 1));
    assert!(!credential.is_fresh(boundary));
    assert!(!credential.is_fresh(boundary + 1));
    assert!(!credential.is_fresh(obtained_at + lifetime));
}

#[test]
fn test_encode_basic_credentials() {
    // RFC 7617 example-style check: base64("id:secret")
    assert_eq!(encode_basic_credentials("id", "secret"), "aWQ6c2VjcmV0");
}
