/// Domain list filtering: case-insensitive substring matching

/// Whether a list entry should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Inline `display` value for this state; `Shown` restores the default layout
    pub fn display_value(self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "none",
        }
    }
}

/// Upper-cased form of the search box value, computed once per filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(raw: &str) -> Self {
        Needle(raw.to_uppercase())
    }

    /// Plain substring test against the upper-cased label.
    /// An empty needle matches every label.
    pub fn matches(&self, label: &str) -> bool {
        label.to_uppercase().contains(self.0.as_str())
    }

    pub fn visibility(&self, label: &str) -> Visibility {
        if self.matches(label) {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// Compute the visibility of every label, in input order
pub fn plan<'a, I>(filter: &str, labels: I) -> Vec<Visibility>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = Needle::new(filter);
    labels.into_iter().map(|label| needle.visibility(label)).collect()
}
