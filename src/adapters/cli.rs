use std::path::PathBuf;

use thiserror::Error;

/// Problems with the command line that end the run before any parsing.
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("Error: Distribution file path has not been specified.")]
    MissingPath,

    #[error("Error: Distribution filepath does not exist.")]
    NotFound(PathBuf),
}

/// Pick the distribution file path out of the process arguments (program name first).
/// Anything after the path is ignored.
pub fn resolve_file_path<I>(args: I) -> Result<PathBuf, CliError>
where
    I: IntoIterator<Item = String>,
{
    let path = args
        .into_iter()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(CliError::MissingPath)?;

    if !path.exists() {
        return Err(CliError::NotFound(path));
    }

    Ok(path)
}

/// Parse command-line arguments for the distribution file path.
///
/// Usage errors are printed to stdout and end the process with status 0.
pub fn parse_file_path_from_cli_args() -> PathBuf {
    match resolve_file_path(std::env::args()) {
        Ok(path) => path,
        Err(err) => {
            log::debug!("Rejected command line: {:?}", err);
            println!("{}", err);
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_path() {
        let res = resolve_file_path(args(&["dist_plot"]));
        assert_eq!(res, Err(CliError::MissingPath));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Error: Distribution file path has not been specified."
        );
    }

    #[test]
    fn test_nonexistent_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let res = resolve_file_path(args(&["dist_plot", missing.to_str().unwrap()]));
        assert_eq!(res, Err(CliError::NotFound(missing)));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Error: Distribution filepath does not exist."
        );
    }

    #[test]
    fn test_existing_path_and_extra_args() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let res = resolve_file_path(args(&["dist_plot", path, "ignored"]));
        assert_eq!(res, Ok(file.path().to_path_buf()));
    }
}
