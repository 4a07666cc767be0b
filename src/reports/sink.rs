//! Report destinations and render outcomes

use std::fmt;
use std::path::{Path, PathBuf};

use super::report::ReportFormat;

/// Where a report is rendered to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output
    Display,
    /// A file, created or truncated
    File(PathBuf),
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("<display>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Displayed,
    /// The report was written to `path`
    Written { format: ReportFormat, path: PathBuf },
    /// Spreadsheet reports only pretend to save
    Simulated { path: PathBuf },
}

impl Rendered {
    /// File the outcome refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Displayed => None,
            Self::Written { path, .. } | Self::Simulated { path } => Some(path),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Displayed => f.write_str("Report displayed"),
            Self::Written {
                format: ReportFormat::Text,
                path,
            } => write!(f, "Report saved to: {}", path.display()),
            Self::Written { format, path } => {
                write!(f, "{} report saved to: {}", format.tag(), path.display())
            }
            Self::Simulated { path } => write!(
                f,
                "XLSX report simulation saved to: {}\n\
                 In a real implementation this would create an Excel file",
                path.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages_name_the_file() {
        let text = Rendered::Written {
            format: ReportFormat::Text,
            path: PathBuf::from("report.txt"),
        };
        let json = Rendered::Written {
            format: ReportFormat::Json,
            path: PathBuf::from("out/report.json"),
        };

        assert_eq!(text.to_string(), "Report saved to: report.txt");
        assert_eq!(json.to_string(), "JSON report saved to: out/report.json");
        assert_eq!(json.path(), Some(Path::new("out/report.json")));
        assert!(Rendered::Displayed.path().is_none());
    }

    #[test]
    fn test_simulated_outcome() {
        let outcome = Rendered::Simulated {
            path: PathBuf::from("report.xlsx"),
        };
        assert!(outcome
            .to_string()
            .starts_with("XLSX report simulation saved to: report.xlsx"));
    }

    #[test]
    fn test_sink_display() {
        assert_eq!(Sink::Display.to_string(), "<display>");
        assert_eq!(Sink::File(PathBuf::from("a.csv")).to_string(), "a.csv");
    }
}
