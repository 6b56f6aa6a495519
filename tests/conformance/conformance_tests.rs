/// Full conformance suite runner
use super::case_loader::TestCase;
use super::case_runner::run_cases;

#[test]
fn test_conformance_suite() {
    let test_data = include_str!("./uri_cases.json");
    let cases: Vec<TestCase> =
        serde_json::from_str(test_data).expect("Failed to parse conformance data");

    println!("\nRunning {} conformance cases...", cases.len());

    let result = run_cases(cases);

    println!("\n{}", result.summary());

    for (i, failure) in result.failures.iter().take(20).enumerate() {
        println!("\n{}. Test #{}: {}", i + 1, failure.test_num, failure.field);
        println!("   Input: {:?} ({})", failure.input, failure.form);
        println!("   Expected: {}", failure.expected);
        println!("   Actual: {}", failure.actual);
    }

    assert_eq!(
        result.failed, 0,
        "\n\nConformance suite failed: {}\n\
         Run with `cargo test test_conformance_suite -- --nocapture` to see failure details.\n",
        result.summary()
    );

    assert!(
        result.passed >= 60,
        "Expected at least 60 conformance cases, but found {}",
        result.passed
    );
}
