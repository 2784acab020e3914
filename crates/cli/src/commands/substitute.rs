use std::path::{Path, PathBuf};

use anyhow::Context;
use tastyforms_settings::{placeholder, API_URL_PLACEHOLDER};

setup_command! {
    /// Artifacts to rewrite
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Production API base URL, written as given
    #[arg(long, env = "TASTYFORMS_API_URL")]
    api_url: String,

    /// Write the result to this path instead of rewriting the input in place
    ///
    /// Only valid with a single input file.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(opts: Options) -> anyhow::Result<()> {
    if opts.output.is_some() && opts.files.len() > 1 {
        anyhow::bail!("--output can only be used with a single input file");
    }

    for file in &opts.files {
        let output = opts.output.as_deref().unwrap_or(file);
        let replaced = substitute_file(file, output, &opts.api_url)?;
        println!("{}: {replaced} replaced", output.display());
    }

    Ok(())
}

/// Rewrites `input` into `output` and returns the number of tokens replaced
///
/// An in-place rewrite without any token leaves the file untouched.
pub(crate) fn substitute_file(input: &Path, output: &Path, api_url: &str) -> anyhow::Result<usize> {
    let content = std::fs::read(input)
        .with_context(|| format!("Could not read {}", input.display()))?;

    let result = placeholder::substitute_bytes(&content, api_url)
        .with_context(|| format!("Could not substitute {}", input.display()))?;

    if result.replaced == 0 {
        tracing::warn!(
            file = %input.display(),
            "No `{API_URL_PLACEHOLDER}` token found"
        );
        if input == output {
            return Ok(0);
        }
    } else {
        tracing::debug!(file = %input.display(), replaced = result.replaced, "Substituted API URL");
    }

    std::fs::write(output, &result.content)
        .with_context(|| format!("Could not write {}", output.display()))?;

    Ok(result.replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_temp_file(dir: &tempfile::TempDir, filename: &str, content: &[u8]) -> PathBuf {
        let file_path = dir.path().join(filename);
        let mut file = File::create(&file_path).expect("should create temp file");
        file.write_all(content).expect("should write to temp file");
        file_path
    }

    #[test]
    fn test_substitute_file_in_place() {
        let dir = tempdir().expect("should create temp dir");
        let path = create_temp_file(
            &dir,
            "appsettings.json",
            br#"{"ApiUrl": "<%API_URL%>", "Health": "<%API_URL%>/health"}"#,
        );

        let replaced = substitute_file(&path, &path, "https://api.example.com").unwrap();
        assert_eq!(replaced, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"ApiUrl": "https://api.example.com", "Health": "https://api.example.com/health"}"#
        );
    }

    #[test]
    fn test_substitute_file_to_output() {
        let dir = tempdir().expect("should create temp dir");
        let input = create_temp_file(&dir, "bundle.js", b"const API = \"<%API_URL%>\";");
        let output = dir.path().join("bundle.prod.js");

        let replaced = substitute_file(&input, &output, "https://api.example.com").unwrap();
        assert_eq!(replaced, 1);
        assert_eq!(
            std::fs::read_to_string(&input).unwrap(),
            "const API = \"<%API_URL%>\";"
        );
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "const API = \"https://api.example.com\";"
        );
    }

    #[test]
    fn test_substitute_file_without_token() {
        let dir = tempdir().expect("should create temp dir");
        let path = create_temp_file(&dir, "readme.txt", b"nothing to see");
        let output = dir.path().join("copy.txt");

        assert_eq!(substitute_file(&path, &path, "https://api.example.com").unwrap(), 0);
        assert_eq!(std::fs::read(&path).unwrap(), b"nothing to see");

        assert_eq!(substitute_file(&path, &output, "https://api.example.com").unwrap(), 0);
        assert_eq!(std::fs::read(&output).unwrap(), b"nothing to see");
    }

    #[test]
    fn test_substitute_file_errors() {
        let dir = tempdir().expect("should create temp dir");
        let missing = dir.path().join("missing.bin");

        let err = substitute_file(&missing, &missing, "https://api.example.com").unwrap_err();
        assert!(err.to_string().starts_with("Could not read"));

        let path = create_temp_file(&dir, "app.bin", b"<%API_URL%>");
        let err = substitute_file(&path, &path, "").unwrap_err();
        assert!(err.to_string().starts_with("Could not substitute"));
        assert_eq!(err.root_cause().to_string(), "replacement value is empty");
        assert_eq!(std::fs::read(&path).unwrap(), b"<%API_URL%>");
    }

    #[tokio::test]
    async fn test_run_rejects_output_with_many_files() {
        let opts = Options {
            files: vec![PathBuf::from("a"), PathBuf::from("b")],
            api_url: "https://api.example.com".to_string(),
            output: Some(PathBuf::from("out")),
        };

        let err = run(opts).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "--output can only be used with a single input file"
        );
    }
}
