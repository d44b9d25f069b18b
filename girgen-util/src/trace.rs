/// The girgen call chain that led to a failed lookup.
///
/// Frames outside the girgen crates are dropped when captured. The chain is only displayed when
/// `RUST_BACKTRACE` is set, so an error report stays one line per cause otherwise.
#[derive(Debug)]
pub struct Trace {
    frames: Vec<String>,
}

impl Trace {
    pub fn new() -> Trace {
        let backtrace = backtrace::Backtrace::new();
        let frames = backtrace
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .filter_map(|symbol| symbol.name().map(|name| format!("{name:#}")))
            .filter(|name| is_girgen_frame(name))
            .collect();
        Trace { frames }
    }

    /// Demangled function names, innermost first
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

fn is_girgen_frame(name: &str) -> bool {
    name.contains("girgen_") && !name.contains("girgen_util::trace")
}

impl Default for Trace {
    fn default() -> Self {
        Trace::new()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let enabled = matches!(std::env::var("RUST_BACKTRACE"), Ok(v) if v != "0");
        if !enabled || self.frames.is_empty() {
            return Ok(());
        }

        write!(f, "looked up from:")?;
        for frame in &self.frames {
            write!(f, "\n    {frame}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Trace {}
