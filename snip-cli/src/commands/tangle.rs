//! Tangle command implementation.

use std::path::PathBuf;

use snip::errors::Result;
use snip::interface::{tangle_documents, tangle_files, Context, TangleReport};

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Suppress the summary.
    pub quiet: bool,
    /// Specific documents to tangle (empty means source_patterns).
    pub files: Vec<PathBuf>,
}

/// Executes the tangle command.
pub fn tangle(ctx: &Context, options: TangleOptions) -> Result<TangleReport> {
    tracing::debug!("Tangling documents in {} mode", ctx.mode());

    let report = if options.files.is_empty() {
        tangle_documents(ctx)?
    } else {
        tangle_files(ctx, &options.files)?
    };

    if !options.quiet {
        print_summary(ctx, &report);
    }

    Ok(report)
}

fn print_summary(ctx: &Context, report: &TangleReport) {
    if report.is_empty() {
        println!("Nothing to tangle.");
        return;
    }

    if ctx.is_preview() {
        println!("Would produce:");
        for desc in report.describe() {
            println!("  {}", desc);
        }
        return;
    }

    println!(
        "Tangled {} files, ran {} blocks.",
        report.files.len(),
        report.runs
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use snip::Config;
    use std::fs;
    use tempfile::tempdir;

    const DOC: &str = "\
# Setup

> File `hello.txt`
> ```
> hello
> ```
";

    #[test]
    fn test_tangle_basic() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        fs::write(dir.path().join("SETUP.md"), DOC).unwrap();

        let options = TangleOptions {
            files: vec![PathBuf::from("SETUP.md")],
            ..Default::default()
        };
        let report = tangle(&ctx, options).unwrap();

        let content = fs::read_to_string(dir.path().join("hello.txt")).unwrap();
        assert_eq!(content, "hello\n");
        assert_eq!(report.documents, 1);
        assert_eq!(report.files.keys().collect::<Vec<_>>(), vec!["hello.txt"]);
    }

    #[test]
    fn test_tangle_source_patterns() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.md"), DOC).unwrap();
        fs::write(
            dir.path().join("other.md"),
            "> File `other.txt`\n> ```\n> x\n> ```\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.source_patterns = vec!["docs/*.md".to_string()];
        let ctx = Context::new(config, dir.path().to_path_buf());

        tangle(&ctx, TangleOptions::default()).unwrap();
        assert!(dir.path().join("hello.txt").exists());
        assert!(!dir.path().join("other.txt").exists());
    }

    #[test]
    fn test_tangle_without_documents() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        assert!(tangle(&ctx, TangleOptions::default()).is_err());
    }

    #[test]
    fn test_tangle_preview() {
        let dir = tempdir().unwrap();
        let ctx = Context::new(Config::default().preview(), dir.path().to_path_buf());
        fs::write(dir.path().join("SETUP.md"), DOC).unwrap();

        let options = TangleOptions {
            quiet: true,
            files: vec![PathBuf::from("SETUP.md")],
        };
        let report = tangle(&ctx, options).unwrap();

        assert!(!dir.path().join("hello.txt").exists());
        assert_eq!(report.describe(), vec!["hello.txt (1 lines)".to_string()]);
    }
}
