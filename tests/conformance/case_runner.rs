/// Conformance case runner
///
/// Runs request-target cases against `parse_request_target`.
use super::case_loader::{
    CaseFailure, CaseResult, Expected, TestCase, error_from_name, form_from_name,
};
use uri_pieces::{Parts, Piece, SchemeType, parse_request_target};

fn scheme_type_name(scheme_type: SchemeType) -> String {
    scheme_type.to_string()
}

fn show(value: Option<&str>) -> String {
    value.map_or_else(|| "<absent>".to_string(), |v| format!("{v:?}"))
}

/// Compare every checked component of `parts` against the case
fn check_components(
    input: &str,
    parts: &Parts,
    expectations: [(&str, &Expected, Piece); 10],
    mut fail: impl FnMut(&str, String, String),
) {
    for (field, expected, piece) in expectations {
        let Some(expected) = expected else {
            continue;
        };
        let actual = piece.get_str(input);
        if actual != expected.as_deref() {
            fail(field, show(expected.as_deref()), show(actual));
        }
    }
    // Absent pieces carry no text, whatever their offset
    for piece in parts.pieces() {
        if piece.get_str(input).is_none() {
            fail("pieces", "present".to_string(), "unmaterializable".to_string());
        }
    }
}

/// Run conformance cases and return results
pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut test_num = 0;

    for case in cases {
        let TestCase::UriTest {
            input,
            form,
            scheme_type,
            scheme,
            authority,
            userinfo,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
            failure,
        } = case
        else {
            continue;
        };
        test_num += 1;

        let mut failures = Vec::new();
        let mut fail = |field: &str, expected: String, actual: String| {
            failures.push(CaseFailure {
                test_num,
                input: input.clone(),
                form: form.clone(),
                field: field.to_string(),
                expected,
                actual,
            });
        };

        let Some(target_form) = form_from_name(&form) else {
            fail("form", "known form".to_string(), form.clone());
            result.failed += 1;
            result.failures.extend(failures);
            continue;
        };

        match (parse_request_target(input.as_bytes(), target_form), &failure) {
            (Ok(_), Some(expected)) => {
                fail("parsing", expected.clone(), "success".to_string());
            }
            (Err(err), None) => {
                fail("parsing", "success".to_string(), format!("{err:?}"));
            }
            (Err(err), Some(expected)) => {
                if error_from_name(expected) != Some(err) {
                    fail("error", expected.clone(), format!("{err:?}"));
                }
            }
            (Ok(parts), None) => {
                if let Some(expected) = &scheme_type {
                    let actual = scheme_type_name(parts.scheme_type);
                    if &actual != expected {
                        fail("scheme_type", expected.clone(), actual);
                    }
                }
                check_components(
                    &input,
                    &parts,
                    [
                        ("scheme", &scheme, parts.scheme),
                        ("authority", &authority, parts.authority),
                        ("userinfo", &userinfo, parts.userinfo),
                        ("username", &username, parts.username),
                        ("password", &password, parts.password),
                        ("host", &host, parts.host),
                        ("port", &port, parts.port),
                        ("path", &path, parts.path),
                        ("query", &query, parts.query),
                        ("fragment", &fragment, parts.fragment),
                    ],
                    &mut fail,
                );
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_reports_mismatch() {
        let cases: Vec<TestCase> = serde_json::from_str(
            r#"[
                {"input": "http://h/p", "host": "h", "path": "/p"},
                {"input": "http://h/p", "host": "wrong"},
                {"input": "", "failure": "bad_syntax"}
            ]"#,
        )
        .unwrap();
        let result = run_cases(cases);
        assert_eq!(result.passed, 1);
        assert_eq!(result.failed, 2);
        assert_eq!(result.failures[0].field, "host");
        assert_eq!(result.failures[1].field, "error");
    }
}
