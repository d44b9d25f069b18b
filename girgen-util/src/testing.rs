use colored::{Color, Colorize};
use similar::{ChangeTag, TextDiff};
use tracing::error;

/// Test failure: either an error from the code under test or a mismatch reported by [`compare`]
pub enum Error {
    Any(Box<dyn std::error::Error + 'static>),
    Mismatch { changed_lines: usize },
}

impl<E> From<E> for Error
where
    E: std::error::Error + 'static,
{
    fn from(e: E) -> Self {
        Error::Any(Box::new(e))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Any(e) => write!(f, "{e}"),
            Error::Mismatch { changed_lines } => {
                write!(f, "Generated text differs from expected on {changed_lines} lines")
            }
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Run a test closure with logging set up, logging every cause of a failure
pub fn run_test<F>(closure: F) -> Result<(), Error>
where
    F: FnOnce() -> Result<(), Error>,
{
    crate::logging::init_log();

    closure().map_err(|err| {
        error!("{err}");
        if let Error::Any(e) = &err {
            for cause in std::iter::successors(e.source(), |c| c.source()) {
                error!("  because: {cause}");
            }
        }
        err
    })
}

/// Line-diff generated text against the expected text, printing a coloured diff with expected-side line
/// numbers. Fails if any line differs.
pub fn compare(generated: &str, expected: &str) -> Result<(), Error> {
    let diff = TextDiff::from_lines(expected, generated);

    let mut changed_lines = 0;
    for change in diff.iter_all_changes() {
        let line = change
            .old_index()
            .map(|i| format!("{:>4}", i + 1))
            .unwrap_or_else(|| "    ".to_string());
        let (marker, color) = match change.tag() {
            ChangeTag::Delete => ("-", Color::Red),
            ChangeTag::Insert => ("+", Color::Green),
            ChangeTag::Equal => (" ", Color::BrightBlack),
        };
        if change.tag() != ChangeTag::Equal {
            changed_lines += 1;
        }
        print!("{}", format!("{line}{marker}| {change}").color(color));
    }

    if changed_lines == 0 {
        Ok(())
    } else {
        println!();
        Err(Error::Mismatch { changed_lines })
    }
}
