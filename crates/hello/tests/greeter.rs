use hello::hello;
use hello_base::tracing::init_tracing;
use hello_base::{HelloResult, ResultExt, bail};
use tracing::info_span;

fn greet_once(round: usize, unanswered: Option<usize>) -> HelloResult<()> {
    hello()?;
    if unanswered == Some(round) {
        bail!("nobody answered");
    }
    Ok(())
}

fn greet_in_sequence(times: usize, unanswered: Option<usize>) -> HelloResult<usize> {
    for round in 0..times {
        greet_once(round, unanswered).with_context(|| format!("greeting round {}", round))?;
    }
    Ok(times)
}

#[test]
fn hello_succeeds_with_tracing_installed() {
    // Other tests in this binary may race for the global subscriber.
    let _ = init_tracing();

    let span = info_span!("greeter_test");
    let _guard = span.enter();

    if let Err(err) = hello() {
        panic!("Hello, World? {:?}", err);
    }
}

#[test]
fn hello_propagates_through_question_mark() {
    assert_eq!(greet_in_sequence(4, None).unwrap(), 4);
}

#[test]
fn failed_greeting_carries_round_context() {
    let err = greet_in_sequence(4, Some(2)).unwrap_err();
    assert_eq!(err.to_string(), "greeting round 2: nobody answered");
    assert_eq!(err.get_context(), ["greeting round 2"]);
}
