//! Integration tests exercising the full encode/optimize/decode flow.

use discretize::{
    ChoiceVar, GridVar, Objective, QrandintVar, QuniformVar, RandintVar, UniformVar, Value, Vars,
    Variable,
};

fn all_kinds() -> Vars {
    Vars::new(vec![
        ChoiceVar::new(["foo", "bar"]).unwrap().into(),
        ChoiceVar::new(["lone"]).unwrap().into(),
        GridVar::new([0.01, 0.1, 1.0, 10.0, 100.0]).unwrap().into(),
        RandintVar::new(1, 10).unwrap().into(),
        QrandintVar::new(1, 10, 2).unwrap().into(),
        UniformVar::new(1.2, 3.4).unwrap().into(),
        QuniformVar::new(0.0, 9.99, 0.2).unwrap().into(),
    ])
}

/// Total score: sum of the display lengths of the decoded values, the kind
/// of cheap stand-in objective the tests can predict exactly.
fn display_len(decoded: &[Value], extra: &[Value]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let total = decoded
        .iter()
        .chain(extra)
        .map(|value| value.to_string().len())
        .sum::<usize>() as f64;
    total
}

// =============================================================================
// Test: encoding a known decoded tuple and decoding it back is exact
// =============================================================================

#[test]
fn test_choice_and_randint_round_trip() {
    let vars = Vars::new(vec![
        ChoiceVar::new(["foo", "bar"]).unwrap().into(),
        RandintVar::new(1, 10).unwrap().into(),
    ]);

    let decoded = vec![Value::from("bar"), Value::Int(7)];
    let encoded = vars.encode(&decoded).unwrap();
    assert_eq!(encoded, vec![0.0, 1.0, 7.0]);
    assert_eq!(vars.decode(&encoded).unwrap(), decoded);
}

#[test]
fn test_every_variable_kind_round_trips() {
    let vars = all_kinds();
    let decoded = vec![
        Value::from("bar"),
        Value::from("lone"),
        Value::Float(0.1),
        Value::Int(9),
        Value::Int(4),
        Value::Float(2.0),
        Value::Float(9.6),
    ];
    let encoded = vars.encode(&decoded).unwrap();
    assert_eq!(vars.decode(&encoded).unwrap(), decoded);
}

// =============================================================================
// Test: any encoded vector sampled within bounds decodes without error
// =============================================================================

#[test]
fn test_bounds_containment_under_random_sampling() {
    let vars = all_kinds();
    let bounds = vars.bounds().to_vec();
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..10_000 {
        let encoded: Vec<f64> = bounds
            .iter()
            .map(|&(low, high)| {
                // Include the exact bound endpoints now and then; those are
                // the values most likely to decode out of domain.
                match rng.u8(0..10) {
                    0 => low,
                    1 => high,
                    _ => low + rng.f64() * (high - low),
                }
            })
            .collect();
        let decoded = vars
            .decode(&encoded)
            .expect("every vector within bounds must decode");
        // And whatever decoded must re-encode exactly.
        vars.encode(&decoded)
            .expect("every decoded tuple must re-encode");
    }
}

// =============================================================================
// Test: the wrapped objective behaves like the user function plus a cache
// =============================================================================

#[test]
fn test_objective_end_to_end() {
    let mut objective = Objective::new(display_len, all_kinds());
    assert_eq!(objective.bounds().len(), 7);

    let decoded = vec![
        Value::from("foo"),
        Value::from("lone"),
        Value::Float(1.0),
        Value::Int(10),
        Value::Int(2),
        Value::Float(1.2),
        Value::Float(0.2),
    ];
    let encoded = objective.encode(&decoded).unwrap();

    // "foo" + "lone" + "1" + "10" + "2" + "1.2" + "0.2" = 17 characters.
    let score = objective.call(&encoded, &[]).unwrap();
    assert!((score - 17.0).abs() < f64::EPSILON);

    let again = objective.call(&encoded, &[]).unwrap();
    assert!((again - score).abs() < f64::EPSILON);
    let info = objective.cache_info();
    assert_eq!((info.hits, info.misses, info.currsize), (1, 1, 1));
}

#[test]
fn test_objective_with_extra_args() {
    let mut objective = Objective::new(display_len, all_kinds());
    let encoded = objective
        .encode(&[
            Value::from("bar"),
            Value::from("lone"),
            Value::Float(10.0),
            Value::Int(5),
            Value::Int(6),
            Value::Float(3.0),
            Value::Float(9.8),
        ])
        .unwrap();

    let plain = objective.call(&encoded, &[]).unwrap();
    let with_extra = objective.call(&encoded, &[Value::from("xyz")]).unwrap();
    assert!((with_extra - plain - 3.0).abs() < f64::EPSILON);
    // Different extra args are different cache entries.
    assert_eq!(objective.cache_info().currsize, 2);
}

#[test]
fn test_nan_probe_is_survivable() {
    let mut objective = Objective::new(display_len, all_kinds());
    let nan_vector = vec![f64::NAN; objective.bounds().len()];
    assert!(objective.call(&nan_vector, &[]).unwrap().is_nan());
    assert_eq!(objective.cache_info().misses, 0);
}

// =============================================================================
// Test: a simulated optimization run over the encoded space
// =============================================================================

#[test]
fn test_random_search_finds_the_known_optimum() {
    // Minimize (n - 7)^2 + (x - 0.6)^2 over an integer and a quantized
    // float; random search over the encoded box must land on the exact
    // optimum because both dimensions decode to coarse grids.
    let vars = Vars::new(vec![
        RandintVar::new(1, 10).unwrap().into(),
        QuniformVar::new(0.0, 1.0, 0.2).unwrap().into(),
    ]);
    let mut objective = Objective::new(
        |decoded: &[Value], _extra: &[Value]| {
            #[allow(clippy::cast_precision_loss)]
            let n = decoded[0].as_int().unwrap() as f64;
            let x = decoded[1].as_float().unwrap();
            (n - 7.0).powi(2) + (x - 0.6).powi(2)
        },
        vars,
    );

    let bounds = objective.bounds().to_vec();
    let mut rng = fastrand::Rng::with_seed(7);
    let mut best = f64::INFINITY;
    let mut best_vector = Vec::new();
    for _ in 0..2_000 {
        let encoded: Vec<f64> = bounds
            .iter()
            .map(|&(low, high)| low + rng.f64() * (high - low))
            .collect();
        let score = objective.call(&encoded, &[]).unwrap();
        if score < best {
            best = score;
            best_vector = encoded;
        }
    }

    assert!(best.abs() < f64::EPSILON);
    assert_eq!(
        objective.decode(&best_vector).unwrap(),
        vec![Value::Int(7), Value::Float(0.6)]
    );

    // 10 integers x 6 grid points bound the number of distinct evaluations.
    let info = objective.cache_info();
    assert!(info.currsize <= 60);
    assert_eq!(info.hits + info.misses, 2_000);
}

// =============================================================================
// Test: decoding respects each variable's documented edge behavior
// =============================================================================

#[test]
fn test_documented_edge_cases() {
    let qrandint = QrandintVar::new(1, 10, 2).unwrap();
    assert_eq!(qrandint.decode(&[2.0]).unwrap(), Value::Int(2));

    let quniform = QuniformVar::new(-11.1, 9.99, 0.22).unwrap();
    assert_eq!(quniform.decode(&[-11.09]).unwrap(), Value::Float(-11.0));

    let grid = GridVar::new(["good", "better", "best"]).unwrap();
    assert_eq!(grid.decode(&[0.0]).unwrap(), Value::from("good"));
    assert_eq!(grid.decode(&[1.0]).unwrap(), Value::from("better"));
    assert_eq!(grid.decode(&[2.0]).unwrap(), Value::from("best"));

    let choice = ChoiceVar::new(["a", "b", "c"]).unwrap();
    assert_eq!(choice.decode(&[0.8, 0.8, 0.1]).unwrap(), Value::from("a"));
}
