use crate::application::ports::ResponseWriter;
use crate::application::use_cases;
use crate::domain::payload::ErrorResponse;
use crate::infrastructure::{
    config::{load_config, AppConfig},
    diagnostics::Diagnostics,
    stdio_writer::StdioWriter,
};

/// Handles one invocation. On failure the error document has already been written to stderr.
pub fn run(args: &[String]) -> Result<(), ErrorResponse> {
    let writer = StdioWriter::new();

    let result = match load_config() {
        Ok(config) => {
            let diagnostics = Diagnostics::new(config.verbose);
            run_with(args, &config, &writer, &diagnostics)
        }
        Err(e) => Err(ErrorResponse::new(e.to_string())),
    };

    result.map_err(|response| {
        report(&writer, &response);
        response
    })
}

pub fn run_with(
    args: &[String],
    config: &AppConfig,
    writer: &dyn ResponseWriter,
    diagnostics: &Diagnostics,
) -> Result<(), ErrorResponse> {
    if args.len() > 1 {
        diagnostics.warn(format!("ignoring {} extra argument(s)", args.len() - 1));
    }

    let output = use_cases::process(args, config.locale).map_err(|e| {
        diagnostics.note(&e);
        e.to_response(config.locale)
    })?;

    diagnostics.note(format!("processedValue = {}", output.processed_value));

    writer
        .write_success(&output)
        .map_err(|e| ErrorResponse::new(e.to_string()))
}

fn report(writer: &dyn ResponseWriter, response: &ErrorResponse) {
    if let Err(e) = writer.write_error(response) {
        eprintln!("greeter: {}: {e}", response.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::WriteError;
    use crate::domain::locale::Locale;
    use crate::domain::payload::{OutputData, Status};
    use std::cell::RefCell;

    struct RecordingWriter {
        successes: RefCell<Vec<OutputData>>,
        errors: RefCell<Vec<ErrorResponse>>,
    }

    impl RecordingWriter {
        fn new() -> Self {
            Self {
                successes: RefCell::new(Vec::new()),
                errors: RefCell::new(Vec::new()),
            }
        }
    }

    impl ResponseWriter for RecordingWriter {
        fn write_success(&self, output: &OutputData) -> Result<(), WriteError> {
            self.successes.borrow_mut().push(output.clone());
            Ok(())
        }

        fn write_error(&self, error: &ErrorResponse) -> Result<(), WriteError> {
            self.errors.borrow_mut().push(error.clone());
            Ok(())
        }
    }

    struct ClosedStdout;

    impl ResponseWriter for ClosedStdout {
        fn write_success(&self, _output: &OutputData) -> Result<(), WriteError> {
            Err(WriteError::Io("broken pipe".to_string()))
        }

        fn write_error(&self, _error: &ErrorResponse) -> Result<(), WriteError> {
            Ok(())
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_success_for_valid_input() {
        let writer = RecordingWriter::new();

        let result = run_with(
            &args(&[r#"{"name":"World","value":10}"#]),
            &AppConfig::default(),
            &writer,
            &Diagnostics::default(),
        );

        assert!(result.is_ok());
        let successes = writer.successes.borrow();
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].message, "Hello from Rust, World!");
        assert_eq!(successes[0].processed_value, 40);
    }

    #[test]
    fn returns_error_response_without_writing_success() {
        let writer = RecordingWriter::new();

        let result = run_with(
            &[],
            &AppConfig::default(),
            &writer,
            &Diagnostics::default(),
        );

        let response = result.unwrap_err();
        assert_eq!(response.status, Status::Error);
        assert_eq!(response.message, "No input data");
        assert!(writer.successes.borrow().is_empty());
    }

    #[test]
    fn localizes_parse_error() {
        let writer = RecordingWriter::new();
        let config = AppConfig {
            locale: Locale::Ru,
            verbose: false,
        };

        let response = run_with(
            &args(&["not-json"]),
            &config,
            &writer,
            &Diagnostics::default(),
        )
        .unwrap_err();

        assert!(response.message.starts_with("Ошибка парсинга JSON: "));
    }

    #[test]
    fn write_failure_becomes_error_response() {
        let response = run_with(
            &args(&[r#"{"name":"World","value":10}"#]),
            &AppConfig::default(),
            &ClosedStdout,
            &Diagnostics::default(),
        )
        .unwrap_err();

        assert!(response.message.contains("broken pipe"));
    }

    #[test]
    fn report_writes_error_document() {
        let writer = RecordingWriter::new();

        report(&writer, &ErrorResponse::new("No input data"));

        assert_eq!(
            writer.errors.borrow().as_slice(),
            &[ErrorResponse::new("No input data")]
        );
    }
}
