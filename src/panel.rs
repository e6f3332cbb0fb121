/// Collapsible panel state
///
/// A panel is either shown (`display: block`) or hidden. Any inline display
/// value other than `block` counts as hidden, so the first click on a panel
/// hidden by the stylesheet opens it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelDisplay {
    Shown,
    Hidden,
}

impl PanelDisplay {
    pub fn from_inline(display: &str) -> Self {
        if display.trim() == "block" {
            PanelDisplay::Shown
        } else {
            PanelDisplay::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelDisplay::Shown => PanelDisplay::Hidden,
            PanelDisplay::Hidden => PanelDisplay::Shown,
        }
    }

    pub fn as_inline(self) -> &'static str {
        match self {
            PanelDisplay::Shown => "block",
            PanelDisplay::Hidden => "none",
        }
    }

    /// Value for the control's `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        match self {
            PanelDisplay::Shown => "true",
            PanelDisplay::Hidden => "false",
        }
    }
}

/// Inline display value after one click on a panel currently showing `current`
pub fn next_display(current: &str) -> &'static str {
    PanelDisplay::from_inline(current).toggled().as_inline()
}

/// Id of the panel a control names explicitly, if any.
///
/// `aria-controls` wins over `data-target`; a leading `#` is accepted on
/// `data-target` so both `panel-1` and `#panel-1` work.
pub fn explicit_target<'a>(aria_controls: Option<&'a str>, data_target: Option<&'a str>) -> Option<&'a str> {
    aria_controls
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| {
            data_target
                .map(|target| target.trim().trim_start_matches('#'))
                .filter(|id| !id.is_empty())
        })
}
