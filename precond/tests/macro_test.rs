use precond::{guard, GuardError, GuardResult};

struct Listener {
    port: u16,
    host: String,
}

fn listen(port: u16, host: &str) -> GuardResult<Listener> {
    let port = guard!(is_in_range(port, 1024, 65535))?;
    let host = guard!(is_not_null_or_whitespace(Some(host)))?;
    Ok(Listener {
        port,
        host: host.to_string(),
    })
}

#[test]
fn guard_macro_passes_value_through() {
    let listener = listen(8080, "localhost").unwrap();
    assert_eq!(listener.port, 8080);
    assert_eq!(listener.host, "localhost");
}

#[test]
fn guard_macro_names_the_argument() {
    let err = listen(80, "localhost").err().unwrap();
    assert_eq!(
        err.to_string(),
        "Argument 'port' must be greater than or equal to '1024' but was '80'."
    );
}

#[test]
fn guard_macro_uses_expression_text() {
    let err = listen(8080, " ").err().unwrap();
    assert_eq!(err.name(), Some("Some(host)"));
}

#[test]
fn guard_macro_accepts_trailing_comma() {
    let count = 0usize;
    let err = guard!(is_greater_than(count, 0,)).unwrap_err();
    assert_eq!(
        err,
        GuardError::range(
            Some("count"),
            precond::Expectation::GreaterThan { bound: "0".into() },
            &0
        )
    );
}

#[test]
fn guard_macro_single_argument_checks() {
    let items: Vec<u8> = Vec::new();
    let err = guard!(is_not_empty(&items)).unwrap_err();
    assert_eq!(err.to_string(), "Parameter '&items' cannot be empty.");
}
