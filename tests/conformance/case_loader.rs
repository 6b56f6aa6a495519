/// Conformance case loader
///
/// Cases are JSON objects naming the request-target form, the input, and
/// the expected text of each component. A `null` component must be absent;
/// a missing key is not checked. Bare strings are comments.
use serde::Deserialize;
use uri_pieces::{Form, ParseError};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A request-target test case
    UriTest {
        input: String,
        #[serde(default = "default_form")]
        form: String,
        #[serde(default)]
        scheme_type: Option<String>,
        #[serde(default, deserialize_with = "expected")]
        scheme: Expected,
        #[serde(default, deserialize_with = "expected")]
        authority: Expected,
        #[serde(default, deserialize_with = "expected")]
        userinfo: Expected,
        #[serde(default, deserialize_with = "expected")]
        username: Expected,
        #[serde(default, deserialize_with = "expected")]
        password: Expected,
        #[serde(default, deserialize_with = "expected")]
        host: Expected,
        #[serde(default, deserialize_with = "expected")]
        port: Expected,
        #[serde(default, deserialize_with = "expected")]
        path: Expected,
        #[serde(default, deserialize_with = "expected")]
        query: Expected,
        #[serde(default, deserialize_with = "expected")]
        fragment: Expected,
        #[serde(default)]
        failure: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

/// Expectation for one component.
/// Outer `None`: not checked. `Some(None)`: must be absent.
pub type Expected = Option<Option<String>>;

fn default_form() -> String {
    "absolute".to_string()
}

fn expected<'de, D>(deserializer: D) -> Result<Expected, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub fn form_from_name(name: &str) -> Option<Form> {
    match name {
        "origin" => Some(Form::Origin),
        "absolute" => Some(Form::Absolute),
        "authority" => Some(Form::Authority),
        "asterisk" => Some(Form::Asterisk),
        _ => None,
    }
}

pub fn error_from_name(name: &str) -> Option<ParseError> {
    match name {
        "bad_scheme" => Some(ParseError::BadScheme),
        "bad_authority" => Some(ParseError::BadAuthority),
        "bad_syntax" => Some(ParseError::BadSyntax),
        "extent_overflow" => Some(ParseError::ExtentOverflow),
        "capacity_exhausted" => Some(ParseError::CapacityExhausted),
        _ => None,
    }
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub test_num: usize,
    pub input: String,
    pub form: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_case() {
        let json = r#"[
            "a comment",
            {"input": "http://h", "host": "h", "port": null}
        ]"#;
        let cases: Vec<TestCase> = serde_json::from_str(json).unwrap();
        assert_eq!(cases.len(), 2);
        assert!(matches!(cases[0], TestCase::Comment(_)));
        let TestCase::UriTest {
            form, host, port, path, ..
        } = &cases[1]
        else {
            panic!("expected a test case");
        };
        assert_eq!(form, "absolute");
        assert_eq!(host, &Some(Some("h".to_string())));
        assert_eq!(port, &Some(None));
        assert_eq!(path, &None);
    }

    #[test]
    fn test_case_result() {
        let result = CaseResult {
            passed: 80,
            failed: 20,
            failures: Vec::new(),
        };
        assert_eq!(result.pass_rate(), 80.0);
        assert!(result.summary().contains("80.00%"));
    }
}
