use heritage_derive::heritage_error;
use std::borrow::Cow;
use std::io;

#[heritage_error]
pub enum SampleError {
    #[error("Io error{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    raw.parse::<u32>().context("Parsing visitor count")
}

#[test]
fn heritage_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/heritage_error_pass.rs");
}

#[test]
fn source_result_gets_context() {
    let err = parse("many").expect_err("non-numeric input should fail");
    assert!(matches!(err, SampleError::Parse { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Parse error (Parsing visitor count): "));
}

#[test]
fn question_mark_converts_without_context() {
    fn read() -> Result<(), SampleError> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))?;
        Ok(())
    }

    let err = read().expect_err("io error should propagate");
    assert_eq!(err.to_string(), "Io error: missing");
}

#[test]
fn context_replaces_on_own_result() {
    let failed: Result<(), SampleError> = Err("boom".into());
    let err = failed.context("Rendering calendar").expect_err("still an error");
    assert_eq!(err.to_string(), "Internal sample error (Rendering calendar): boom");
}

#[test]
fn internal_from_owned_string() {
    let err = SampleError::from(format!("scene {} missing", 3));
    assert!(matches!(err, SampleError::Internal { context: None, .. }));
    assert_eq!(err.to_string(), "Internal sample error: scene 3 missing");
}
