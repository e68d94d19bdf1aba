//! Serialization tests for the `serde` feature.
//!
//! The contract mirrors how a distributed optimizer resumes work: the
//! variable configuration travels, the cache does not. A deserialized
//! [`Vars`] must behave identically to the original, and rewrapping it in a
//! fresh [`Objective`] must start from an empty cache.

#![cfg(feature = "serde")]

use discretize::{
    ChoiceVar, GridVar, Objective, QrandintVar, QuniformVar, RandintVar, UniformVar, Value, Var,
    Variable, Vars,
};

fn all_kinds() -> Vars {
    Vars::new(vec![
        ChoiceVar::new(["foo", "bar"]).unwrap().into(),
        GridVar::new(["good", "better", "best"]).unwrap().into(),
        RandintVar::new(1, 10).unwrap().into(),
        QrandintVar::new(1, 10, 2).unwrap().into(),
        UniformVar::new(1.2, 3.4).unwrap().into(),
        QuniformVar::new(-11.1, 9.99, 0.22).unwrap().into(),
    ])
}

#[test]
fn vars_round_trip_through_json() {
    let vars = all_kinds();
    let json = serde_json::to_string(&vars).unwrap();
    let restored: Vars = serde_json::from_str(&json).unwrap();

    // Bounds must match bit-exactly; they are recomputed from the domain
    // parameters on deserialization.
    assert_eq!(restored.bounds(), vars.bounds());
    assert_eq!(restored.encoded_len(), vars.encoded_len());
    assert_eq!(restored.decoded_len(), vars.decoded_len());

    let decoded = vec![
        Value::from("bar"),
        Value::from("best"),
        Value::Int(7),
        Value::Int(4),
        Value::Float(2.0),
        Value::Float(-11.0),
    ];
    let encoded = vars.encode(&decoded).unwrap();
    assert_eq!(restored.decode(&encoded).unwrap(), decoded);
    assert_eq!(restored.encode(&decoded).unwrap(), encoded);
}

#[test]
fn only_domain_parameters_are_serialized() {
    let var: Var = QuniformVar::new(0.0, 9.99, 0.2).unwrap().into();
    let json = serde_json::to_string(&var).unwrap();
    assert!(!json.contains("bounds"));

    // Bounds are recomputed on arrival, not read from the wire.
    let restored: Var = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.bounds(), var.bounds());
}

#[test]
fn deserialization_revalidates_the_configuration() {
    // Inverted bounds and a duplicate category are rejected by the same
    // validation that guards the constructors.
    let inverted = r#"{"Quniform":{"lower":5.0,"upper":1.0,"quantum":0.2}}"#;
    assert!(serde_json::from_str::<Var>(inverted).is_err());

    let duplicated = r#"{"Choice":[{"Str":"foo"},{"Str":"foo"}]}"#;
    assert!(serde_json::from_str::<Var>(duplicated).is_err());

    let zero_quantum = r#"{"Qrandint":{"lower":1,"upper":10,"quantum":0}}"#;
    assert!(serde_json::from_str::<Var>(zero_quantum).is_err());
}

#[test]
fn rewrapping_restored_vars_starts_with_an_empty_cache() {
    let mut objective = Objective::new(|_: &[Value], _: &[Value]| 1.0, all_kinds());
    let encoded = objective
        .encode(&[
            Value::from("foo"),
            Value::from("good"),
            Value::Int(1),
            Value::Int(2),
            Value::Float(1.2),
            Value::Float(0.0),
        ])
        .unwrap();
    objective.call(&encoded, &[]).unwrap();
    assert_eq!(objective.cache_info().currsize, 1);

    // Suspend: only the variable configuration is persisted.
    let json = serde_json::to_string(objective.vars()).unwrap();

    // Resume: a fresh wrapper over the same configuration, empty cache.
    let restored: Vars = serde_json::from_str(&json).unwrap();
    let mut resumed = Objective::new(|_: &[Value], _: &[Value]| 1.0, restored);
    assert_eq!(resumed.cache_info().currsize, 0);
    assert!((resumed.call(&encoded, &[]).unwrap() - 1.0).abs() < f64::EPSILON);
    assert_eq!(resumed.cache_info().misses, 1);
}
