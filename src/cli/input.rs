//! Input resolution and argument cleaning for API subcommands

use std::path::Path;

use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::config::{Settings, APP_ID_ENV};
use crate::infrastructure::InfraError;

/// Resolve the credential: flag or environment (already merged by clap),
/// then the config file.
pub fn clean_app_id(app_id: Option<&str>, settings: &Settings) -> CliResult<String> {
    app_id
        .filter(|id| !id.is_empty())
        .or(settings.app_id.as_deref().filter(|id| !id.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::Usage(format!(
                "Missing option \"--app-id\" / \"-a\" or {} environment value.",
                APP_ID_ENV
            ))
        })
}

/// Resolve a text input from its argument, falling back to `file` only
/// when the argument is absent or empty.
///
/// `name` is used in the usage error, e.g. `sentence` →
/// "Missing sentence. You must set SENTENCE argument or --file option."
pub fn clean_text(arg: Option<&str>, file: Option<&Path>, name: &str) -> CliResult<String> {
    match (arg.filter(|s| !s.is_empty()), file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => read_text_file(path),
        (None, None) => Err(CliError::Usage(format!(
            "Missing {}. You must set {} argument or --file option.",
            name,
            name.to_uppercase()
        ))),
    }
}

/// Like [`clean_text`], split into one review per line.
pub fn clean_review(review: Option<&str>, file: Option<&Path>) -> CliResult<Vec<String>> {
    let text = clean_text(review, file, "review")?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parse the summary length.
pub fn clean_length(length: Option<&str>) -> CliResult<Option<u32>> {
    length
        .map(|l| {
            l.trim().parse::<u32>().map_err(|_| {
                CliError::Usage(
                    "--length is not Integer. You must choice length from 60/120/180.".to_string(),
                )
            })
        })
        .transpose()
}

/// Translate a comma-separated filter list to the pipe-separated form the
/// service expects: `form,pos,read` → `form|pos|read`.
pub fn to_pipe_filter(filter: Option<&str>) -> Option<String> {
    filter.map(|f| f.replace(',', "|"))
}

fn read_text_file(path: &Path) -> CliResult<String> {
    debug!("reading input from {}", path.display());
    let bytes = std::fs::read(path)
        .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
    String::from_utf8(bytes).map_err(|_| {
        CliError::InvalidArgs(format!("{} is not valid UTF-8 text", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn given_app_id_flag_when_cleaning_then_returns_it() {
        let settings = Settings {
            app_id: Some("from-config".into()),
            ..Settings::default()
        };
        assert_eq!(clean_app_id(Some("dummy"), &settings).unwrap(), "dummy");
    }

    #[test]
    fn given_no_flag_when_cleaning_app_id_then_falls_back_to_config() {
        let settings = Settings {
            app_id: Some("from-config".into()),
            ..Settings::default()
        };
        assert_eq!(clean_app_id(None, &settings).unwrap(), "from-config");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn given_no_app_id_anywhere_when_cleaning_then_usage_error(#[case] app_id: Option<&str>) {
        let err = clean_app_id(app_id, &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(
            err.to_string(),
            "Missing option \"--app-id\" / \"-a\" or GOOLABS_APP_ID environment value."
        );
    }

    #[test]
    fn given_sentence_and_file_when_cleaning_then_argument_wins() {
        let file = write_temp("sentence_file");
        let text = clean_text(Some("sentence"), Some(file.path()), "sentence").unwrap();
        assert_eq!(text, "sentence");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn given_only_file_when_cleaning_then_reads_file(#[case] arg: Option<&str>) {
        let file = write_temp("sentence_file");
        let text = clean_text(arg, Some(file.path()), "sentence").unwrap();
        assert_eq!(text, "sentence_file");
    }

    #[test]
    fn given_neither_when_cleaning_then_usage_error_names_input() {
        let err = clean_text(None, None, "sentence").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing sentence. You must set SENTENCE argument or --file option."
        );
    }

    #[test]
    fn given_missing_file_when_cleaning_then_io_error() {
        let err = clean_text(None, Some(Path::new("/nonexistent/input.txt")), "body").unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_multiline_review_when_cleaning_then_splits_lines() {
        assert_eq!(
            clean_review(Some("review1\nreview2"), None).unwrap(),
            vec!["review1", "review2"]
        );
        let file = write_temp("review1\nreview2\n");
        assert_eq!(
            clean_review(None, Some(file.path())).unwrap(),
            vec!["review1", "review2"]
        );
    }

    #[test]
    fn given_no_review_when_cleaning_then_usage_error() {
        let err = clean_review(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing review. You must set REVIEW argument or --file option."
        );
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("60"), Some(60))]
    #[case(Some("120"), Some(120))]
    #[case(Some("180"), Some(180))]
    fn given_length_when_cleaning_then_parses(
        #[case] input: Option<&str>,
        #[case] expected: Option<u32>,
    ) {
        assert_eq!(clean_length(input).unwrap(), expected);
    }

    #[test]
    fn given_non_integer_length_when_cleaning_then_usage_error() {
        let err = clean_length(Some("invalid_string")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "--length is not Integer. You must choice length from 60/120/180."
        );
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("PSN,LOC"), Some("PSN|LOC"))]
    #[case(Some("form,pos,read"), Some("form|pos|read"))]
    #[case(Some("名詞"), Some("名詞"))]
    fn given_comma_filter_when_translating_then_uses_pipes(
        #[case] input: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(to_pipe_filter(input).as_deref(), expected);
    }
}
