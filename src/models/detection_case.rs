use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseName {
    Mushy,
    Diaper,
    NonStool,
}

impl CaseName {
    pub fn expects_stool(self) -> bool {
        !matches!(self, CaseName::NonStool)
    }

    /// The positive cases are sent with the user's confirmation already set.
    pub fn user_confirmed(self) -> bool {
        self.expects_stool()
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseName::Mushy => write!(f, "mushy"),
            CaseName::Diaper => write!(f, "diaper"),
            CaseName::NonStool => write!(f, "non_stool"),
        }
    }
}

/// One presence-classification case: an image and the classification the
/// endpoint must return for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectionCase {
    pub name: CaseName,
    pub path: PathBuf,
    pub expect_stool: bool,
}

impl DetectionCase {
    pub fn new(name: CaseName, path: PathBuf) -> Self {
        Self {
            name,
            path,
            expect_stool: name.expects_stool(),
        }
    }

    /// The fixed case list, in run order.
    pub fn standard(mushy: PathBuf, diaper: PathBuf, non_stool: PathBuf) -> Vec<Self> {
        vec![
            Self::new(CaseName::Mushy, mushy),
            Self::new(CaseName::Diaper, diaper),
            Self::new(CaseName::NonStool, non_stool),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_cases_are_ordered_with_expectations() {
        let cases = DetectionCase::standard("m".into(), "d".into(), "n".into());
        let summary: Vec<_> = cases
            .iter()
            .map(|c| (c.name.to_string(), c.expect_stool, c.name.user_confirmed()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("mushy".to_string(), true, true),
                ("diaper".to_string(), true, true),
                ("non_stool".to_string(), false, false),
            ]
        );
    }
}
