use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Writes the rendered brief to `out` (full overwrite) when given, then to
/// stdout. Output is written verbatim, with no newline appended.
pub fn emit(rendered: &str, out: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = out {
        std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote brief");
    }
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::emit;
    use tempfile::TempDir;

    #[test]
    fn out_file_is_overwritten_not_appended() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("brief.json");
        std::fs::write(&path, "stale content that is much longer than the new one").expect("seed");

        emit("{}", Some(path.as_path())).expect("emit");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "{}");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("missing-dir/brief.json");
        let err = emit("{}", Some(path.as_path())).expect_err("write should fail");
        assert!(err.to_string().contains("failed to write"));
    }
}
