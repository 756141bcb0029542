//! Black-box tests for the full invoice → statement → rendering pipeline,
//! driven through the same JSON shapes an external loader would hand us.

use stagebill_catalog::Catalog;
use stagebill_core::StatementError;
use stagebill_render::{html_statement, plain_statement};
use stagebill_statement::Invoice;

fn bigco_catalog() -> Catalog {
    serde_json::from_str(
        r#"{
            "hamlet": { "name": "Hamlet", "genre": "tragedy" },
            "as-like": { "name": "As You Like It", "genre": "comedy" },
            "othello": { "name": "Othello", "genre": "tragedy" }
        }"#,
    )
    .unwrap()
}

fn bigco_invoice() -> Invoice {
    serde_json::from_str(
        r#"{
            "customer": "BigCo",
            "performances": [
                { "play_id": "hamlet", "audience": 55 },
                { "play_id": "as-like", "audience": 35 },
                { "play_id": "othello", "audience": 40 }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn renders_the_plain_text_statement() {
    let actual = plain_statement(&bigco_invoice(), &bigco_catalog()).unwrap();

    let expected = "Statement for BigCo\n\
                    \x20Hamlet: $650.00 (55 seats)\n\
                    \x20As You Like It: $580.00 (35 seats)\n\
                    \x20Othello: $500.00 (40 seats)\n\
                    Amount owed is $1,730.00\n\
                    You earned 47 credits\n";

    assert_eq!(actual, expected);
}

#[test]
fn renders_the_html_statement() {
    let actual = html_statement(&bigco_invoice(), &bigco_catalog()).unwrap();

    let expected = "<h1>Statement for BigCo</h1>\n\
                    <table>\n\
                    <tr><th>play</th><th>seats</th><th>cost</th></tr>\n\
                    \x20<tr><td>Hamlet</td><td>55</td><td>$650.00</td></tr>\n\
                    \x20<tr><td>As You Like It</td><td>35</td><td>$580.00</td></tr>\n\
                    \x20<tr><td>Othello</td><td>40</td><td>$500.00</td></tr>\n\
                    </table>\n\
                    <p>Amount owed is <em>$1,730.00</em></p>\n\
                    <p>You earned <em>47</em> credits</p>\n";

    assert_eq!(actual, expected);
}

#[test]
fn missing_play_aborts_before_any_output() {
    let invoice: Invoice = serde_json::from_str(
        r#"{
            "customer": "BigCo",
            "performances": [
                { "play_id": "hamlet2", "audience": 55 },
                { "play_id": "as-like", "audience": 35 }
            ]
        }"#,
    )
    .unwrap();

    let err = plain_statement(&invoice, &bigco_catalog()).unwrap_err();
    assert_eq!(err, StatementError::unknown_play("hamlet2"));
    assert_eq!(err.to_string(), "unknown play: hamlet2");
}

#[test]
fn unsupported_genre_aborts_before_any_output() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "hamlet": { "name": "Hamlet", "genre": "sci-fi" },
            "as-like": { "name": "As You Like It", "genre": "comedy" },
            "othello": { "name": "Othello", "genre": "tragedy" }
        }"#,
    )
    .unwrap();

    let err = html_statement(&bigco_invoice(), &catalog).unwrap_err();
    assert_eq!(err, StatementError::unsupported_genre("sci-fi"));
    assert_eq!(err.to_string(), "unsupported genre: sci-fi");
}
