//! Integration tests for the `footprint` estimator and presentation mapping.
//!
//! Covers: error-band ordering, empty input, monotonicity, linearity in model multiplier and grid
//! intensity, the two reference scenarios, and the unit/band/phrase boundaries.
//! External interactions: none (pure function tests).

use footprint::{
    equivalence_phrase, estimate, format_magnitude, format_range, severity_band,
    FootprintEstimate, GridIntensityProfile, ModelProfile, SeverityBand,
};

fn all_combinations() -> impl Iterator<Item = (ModelProfile, GridIntensityProfile)> {
    ModelProfile::ALL.into_iter().flat_map(|m| {
        GridIntensityProfile::ALL
            .into_iter()
            .map(move |i| (m, i))
    })
}

/// **Test: lower ≤ central ≤ upper for every model, intensity, and a spread of lengths.**
#[test]
fn bounds_enclose_central_value() {
    for (model, intensity) in all_combinations() {
        for len in [0, 1, 3, 4, 17, 400, 4000, 123_457] {
            let e = estimate(&"x".repeat(len), model, intensity);
            assert!(e.lower_bound <= e.central_value, "{model} {intensity} {len}");
            assert!(e.central_value <= e.upper_bound, "{model} {intensity} {len}");
        }
    }
}

/// **Test: empty text yields the zero estimate for every model and intensity.**
#[test]
fn empty_text_is_zero() {
    for (model, intensity) in all_combinations() {
        let e = estimate("", model, intensity);
        assert_eq!(e.central_value, 0.0);
        assert_eq!(e, FootprintEstimate::ZERO);
    }
}

/// **Test: a longer prompt never yields a smaller estimate.**
#[test]
fn estimate_is_monotonic_in_length() {
    for (model, intensity) in all_combinations() {
        let mut previous = 0.0;
        for len in 0..200 {
            let current = estimate(&"a".repeat(len), model, intensity).central_value;
            assert!(current >= previous, "{model} {intensity} len={len}");
            previous = current;
        }
    }
}

/// **Test: GPT-4 costs four times GPT-3 for the same non-empty text.**
#[test]
fn estimate_is_linear_in_model_multiplier() {
    let text = "Explain the borrow checker to me like I am five.".repeat(10);
    for intensity in GridIntensityProfile::ALL {
        let gpt3 = estimate(&text, ModelProfile::Gpt3, intensity).central_value;
        let gpt4 = estimate(&text, ModelProfile::Gpt4, intensity).central_value;
        assert!(gpt3 > 0.0);
        assert!((gpt4 / gpt3 - 4.0).abs() < 1e-9);
    }
}

/// **Test: conservative intensity is exactly twice realistic.**
#[test]
fn estimate_is_linear_in_grid_intensity() {
    let text = "z".repeat(1234);
    for model in ModelProfile::ALL {
        let realistic = estimate(&text, model, GridIntensityProfile::Realistic).central_value;
        let conservative = estimate(&text, model, GridIntensityProfile::Conservative).central_value;
        assert_eq!(conservative, 2.0 * realistic);
    }
}

/// **Test: 400 characters on GPT-3 with realistic intensity.**
///
/// **Expected:** 100 tokens → 0.00002 kWh → 0.004 g → "4.0mg", low/green, simple email.
#[test]
fn scenario_short_prompt_gpt3_realistic() {
    let e = estimate(&"a".repeat(400), ModelProfile::Gpt3, GridIntensityProfile::Realistic);
    assert!((e.central_value - 0.004).abs() < 1e-12);
    assert_eq!(format_magnitude(e.central_value), "4.0mg");
    assert_eq!(severity_band(e.central_value), SeverityBand::Low);
    assert_eq!(severity_band(e.central_value).color(), "green");
    assert_eq!(equivalence_phrase(e.central_value), "Sending a simple email");
}

/// **Test: 4000 characters on GPT-4 with conservative intensity.**
///
/// **Expected:** 1000 tokens → 0.0008 kWh → 0.32 g → "0.32g", medium/yellow, SD video minute.
#[test]
fn scenario_long_prompt_gpt4_conservative() {
    let e = estimate(&"a".repeat(4000), ModelProfile::Gpt4, GridIntensityProfile::Conservative);
    assert!((e.central_value - 0.32).abs() < 1e-12);
    assert_eq!(format_magnitude(e.central_value), "0.32g");
    assert_eq!(severity_band(e.central_value), SeverityBand::Medium);
    assert_eq!(severity_band(e.central_value).color(), "yellow");
    assert_eq!(
        equivalence_phrase(e.central_value),
        "Watching 1 minute of streaming video (SD)"
    );
}

/// **Test: exactly 0.01 g takes the grams path.**
#[test]
fn boundary_one_centigram_formats_as_grams() {
    assert_eq!(format_magnitude(0.01), "0.01g");
}

/// **Test: exactly 0.10 g is medium and lands in the search range.**
#[test]
fn boundary_tenth_gram_is_medium() {
    assert_eq!(severity_band(0.10), SeverityBand::Medium);
    assert_eq!(equivalence_phrase(0.10), "Google search (1-2 queries)");
}

/// **Test: every equivalence range boundary is lower-inclusive.**
#[test]
fn equivalence_ranges_are_lower_inclusive() {
    let cases = [
        (0.0, "Sending a simple email"),
        (0.0999, "Sending a simple email"),
        (0.10, "Google search (1-2 queries)"),
        (0.20, "Sending an email with a small attachment"),
        (0.30, "Watching 1 minute of streaming video (SD)"),
        (0.50, "Watching 1 minute of streaming video (HD)"),
        (0.70, "Sending 1 minute of video via email"),
        (1.00, "Watching 10 minutes of streaming video (HD)"),
        (1.99, "Watching 10 minutes of streaming video (HD)"),
        (2.00, "Watching 1 hour of streaming video (HD)"),
        (4.99, "Watching 1 hour of streaming video (HD)"),
        (5.00, "Electricity for 1 hour of room lighting with an incandescent bulb"),
        (1e6, "Electricity for 1 hour of room lighting with an incandescent bulb"),
    ];
    for (grams, phrase) in cases {
        assert_eq!(equivalence_phrase(grams), phrase, "grams={grams}");
    }
}

/// **Test: each range bound picks its own unit.**
///
/// **Setup:** central 0.01 g → lower 0.008 g, upper 0.012 g.
/// **Expected:** lower in milligrams, upper in grams.
#[test]
fn range_bounds_format_independently() {
    let e = FootprintEstimate::from_central(0.01);
    let (lower, upper) = format_range(&e);
    assert_eq!(lower, "8.0mg");
    assert_eq!(upper, "0.01g");
}

/// **Test: estimates and profiles serialize with stable ids.**
#[test]
fn serializes_with_profile_ids() {
    let json = serde_json::to_string(&ModelProfile::Gpt4oMini).unwrap();
    assert_eq!(json, "\"gpt4o_mini\"");
    let json = serde_json::to_string(&GridIntensityProfile::Conservative).unwrap();
    assert_eq!(json, "\"conservative\"");
    let json = serde_json::to_string(&SeverityBand::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
    let value = serde_json::to_value(FootprintEstimate::ZERO).unwrap();
    assert_eq!(value["central_value"], 0.0);
}
