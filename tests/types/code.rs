use schema_rail::Code;

#[test]
fn every_code_round_trips_through_its_token() {
    for code in Code::ALL {
        assert_eq!(code.as_str().parse::<Code>(), Ok(code));
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn vocabulary_is_fixed() {
    let tokens: Vec<&str> = Code::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        tokens,
        vec![
            "literal", "number", "min", "max", "string", "minlen", "maxlen", "pattern", "table",
            "empty", "required", "unique", "func", "any", "all",
        ]
    );
}

#[test]
fn unknown_token_is_rejected() {
    let err = "too_long".parse::<Code>().unwrap_err();
    assert_eq!(err.to_string(), "unknown failure code `too_long`");
}

#[test]
fn only_combinator_codes_aggregate() {
    let aggregates: Vec<Code> = Code::ALL.into_iter().filter(|c| c.is_aggregate()).collect();
    assert_eq!(aggregates, vec![Code::Any, Code::All]);
}
