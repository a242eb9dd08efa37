use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fakesmith_generate::errors::GenerationError;
use fakesmith_generate::{
    CustomProvider, DefaultGenerator, Dispatch, FakeValue, Generator, GeneratorConfig,
    UniqueGenerator, ValidGenerator,
};

fn generator() -> Generator {
    let config = GeneratorConfig {
        seed: Some(3),
        ..GeneratorConfig::default()
    };
    Generator::new(config).expect("valid config")
}

/// Provider whose `cycle` formatter walks `0..period` and counts calls.
fn cycling(period: usize) -> (CustomProvider, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let provider = CustomProvider::new("Cycle").formatter("cycle", move |_, _| {
        let call = counter.fetch_add(1, Ordering::SeqCst);
        Ok(FakeValue::Int((call % period) as i64))
    });
    (provider, calls)
}

#[test]
fn unique_exhausts_a_finite_domain() {
    let mut generator = generator();
    let (provider, calls) = cycling(3);
    generator.add_provider(provider);

    let mut unique = generator.unique_with(5).expect("positive budget");
    let mut seen = HashSet::new();
    for _ in 0..3 {
        let value = unique.get("cycle").expect("fresh value");
        assert!(seen.insert(value.ledger_key()));
    }
    assert_eq!(unique.seen("cycle"), 3);

    let before = calls.load(Ordering::SeqCst);
    let err = unique.get("cycle").expect_err("domain exhausted");
    assert!(matches!(
        err,
        GenerationError::RetryBudgetExceeded { ref formatter, max_retries: 5 } if formatter == "cycle"
    ));
    assert_eq!(calls.load(Ordering::SeqCst) - before, 5);
}

#[test]
fn unique_ledgers_are_per_formatter() {
    let mut generator = generator();
    generator.add_provider(
        CustomProvider::new("Fixed")
            .constant("a", "same")
            .constant("b", "same"),
    );

    let mut unique = generator.unique_with(3).expect("positive budget");
    assert_eq!(unique.get("a").expect("a"), FakeValue::from("same"));
    assert_eq!(unique.get("b").expect("b"), FakeValue::from("same"));
    assert!(unique.get("a").is_err());
    assert_eq!(unique.seen("a"), 1);
    assert_eq!(unique.seen("b"), 1);
}

#[test]
fn unique_distinguishes_value_types() {
    let mut generator = generator();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    generator.add_provider(CustomProvider::new("Mixed").formatter("one", move |_, _| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(FakeValue::Int(1))
        } else {
            Ok(FakeValue::from("1"))
        }
    }));

    let mut unique = generator.unique_with(2).expect("positive budget");
    assert_eq!(unique.get("one").expect("int"), FakeValue::Int(1));
    assert_eq!(unique.get("one").expect("text"), FakeValue::from("1"));
}

#[test]
fn unique_propagates_formatter_errors_without_retrying() {
    let mut generator = generator();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    generator.add_provider(CustomProvider::new("Broken").formatter("broken", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(GenerationError::InvalidArgument("no".to_string()))
    }));

    let mut unique = generator.unique();
    assert!(matches!(
        unique.get("broken"),
        Err(GenerationError::InvalidArgument(_))
    ));
    assert!(matches!(
        unique.get("missing"),
        Err(GenerationError::UnknownFormatter(_))
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unique_uses_configured_budget() {
    let config = GeneratorConfig {
        max_retries: 7,
        ..GeneratorConfig::default()
    };
    let mut generator = Generator::new(config).expect("valid config");
    assert_eq!(generator.unique().max_retries(), 7);
    assert_eq!(UniqueGenerator::from(DefaultGenerator::new(1_i64)).max_retries(), 10_000);
}

#[test]
fn zero_retry_budget_is_rejected() {
    let mut generator = generator();
    assert!(matches!(
        generator.unique_with(0),
        Err(GenerationError::InvalidArgument(_))
    ));
    assert!(matches!(
        generator.valid_with(|_| true, 0),
        Err(GenerationError::InvalidArgument(_))
    ));
}

#[test]
fn valid_makes_exactly_max_retries_attempts() {
    let mut generator = generator();
    let (provider, calls) = cycling(10);
    generator.add_provider(provider);

    let mut valid = generator
        .valid_with(|_| false, 5)
        .expect("positive budget");
    let err = valid.get("cycle").expect_err("never valid");
    assert!(matches!(
        err,
        GenerationError::RetryBudgetExceeded { max_retries: 5, .. }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn valid_retries_until_predicate_holds() {
    let mut generator = generator();
    let (provider, calls) = cycling(10);
    generator.add_provider(provider);

    let mut valid = generator.valid(|value| value.as_i64() == Some(4));
    assert_eq!(valid.get("cycle").expect("eventually valid"), FakeValue::Int(4));
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn valid_without_predicate_accepts_first_value() {
    let mut generator = generator();
    let (provider, calls) = cycling(10);
    generator.add_provider(provider);

    let mut valid =
        ValidGenerator::with_max_retries(&mut generator, None, 3).expect("positive budget");
    assert_eq!(valid.get("cycle").expect("first value"), FakeValue::Int(0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn proxies_compose() {
    let mut generator = generator();
    let (provider, _) = cycling(6);
    generator.add_provider(provider);

    let even = ValidGenerator::with_max_retries(
        &mut generator,
        Some(Box::new(|value: &FakeValue| {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        })),
        10,
    )
    .expect("positive budget");
    let mut unique = UniqueGenerator::with_max_retries(even, 10).expect("positive budget");

    let values: Vec<FakeValue> = (0..3)
        .map(|_| unique.get("cycle").expect("even and fresh"))
        .collect();
    assert_eq!(
        values,
        vec![FakeValue::Int(0), FakeValue::Int(2), FakeValue::Int(4)]
    );
}

#[test]
fn default_generator_ignores_the_formatter() {
    let mut default = DefaultGenerator::new(42_i64);
    assert_eq!(default.get("anything").expect("default"), FakeValue::Int(42));
    assert_eq!(
        default
            .invoke("anything", &[FakeValue::from("x")])
            .expect("default"),
        FakeValue::Int(42)
    );
    assert_eq!(
        DefaultGenerator::default().get("x").expect("null"),
        FakeValue::Null
    );
}

#[test]
fn optional_respects_weight_extremes() {
    let mut generator = generator();
    generator.add_provider(CustomProvider::new("Person").constant("name", "Ada"));

    {
        let mut never = generator.optional(0.0, "fallback").expect("weight in range");
        for _ in 0..20 {
            assert_eq!(never.get("name").expect("fallback"), FakeValue::from("fallback"));
        }
    }
    let mut always = generator.optional(1.0, FakeValue::Null).expect("weight in range");
    for _ in 0..20 {
        assert_eq!(always.get("name").expect("value"), FakeValue::from("Ada"));
    }
}

#[test]
fn optional_rolls_on_every_call() {
    let mut generator = generator();
    generator.add_provider(CustomProvider::new("Person").constant("name", "Ada"));

    let mut optional = generator.optional(0.5, FakeValue::Null).expect("weight in range");
    let values: Vec<FakeValue> = (0..200)
        .map(|_| optional.get("name").expect("value"))
        .collect();
    assert!(values.iter().any(FakeValue::is_null));
    assert!(values.iter().any(|value| !value.is_null()));
}

#[test]
fn optional_rejects_out_of_range_weight() {
    let mut generator = generator();
    assert!(matches!(
        generator.optional(1.5, FakeValue::Null),
        Err(GenerationError::InvalidArgument(_))
    ));
    assert!(matches!(
        generator.optional(-0.1, FakeValue::Null),
        Err(GenerationError::InvalidArgument(_))
    ));
}
