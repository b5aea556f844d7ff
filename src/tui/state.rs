//! Filter-control focus for the dashboard filter bar.
//!
//! The filter bar is a row of keyboard-driven controls. Exactly one
//! control has focus; stepping the focused control adjusts the
//! corresponding query predicate.

/// The filter controls, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterControl {
    /// Platform selector.
    #[default]
    Platform,
    /// Review-type selector.
    ReviewType,
    /// Rating lower bound.
    RatingLo,
    /// Rating upper bound.
    RatingHi,
    /// Start of the date window.
    StartDate,
    /// End of the date window.
    EndDate,
}

impl FilterControl {
    /// All controls in focus order.
    pub const ALL: [Self; 6] = [
        Self::Platform,
        Self::ReviewType,
        Self::RatingLo,
        Self::RatingHi,
        Self::StartDate,
        Self::EndDate,
    ];

    /// Display label for the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Platform => "Platform",
            Self::ReviewType => "Type",
            Self::RatingLo => "Rating from",
            Self::RatingHi => "Rating to",
            Self::StartDate => "Start",
            Self::EndDate => "End",
        }
    }

    /// The control after this one, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        let wrapped = (position + 1) % Self::ALL.len();
        Self::ALL.get(wrapped).copied().unwrap_or_default()
    }

    /// The control before this one, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let position = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        let wrapped = position
            .checked_sub(1)
            .unwrap_or(Self::ALL.len().saturating_sub(1));
        Self::ALL.get(wrapped).copied().unwrap_or_default()
    }
}

/// Steps a selection through `[None, options...]`, wrapping in both
/// directions. `None` stands for the wildcard "All" entry.
#[must_use]
pub fn cycle_option(current: Option<&str>, options: &[String], forward: bool) -> Option<String> {
    // Index 0 is the wildcard; options start at 1.
    let count = options.len() + 1;
    let position = current
        .and_then(|value| options.iter().position(|option| option == value))
        .map_or(0, |index| index + 1);
    let stepped = if forward {
        (position + 1) % count
    } else {
        position.checked_sub(1).unwrap_or(count.saturating_sub(1))
    };
    if stepped == 0 {
        None
    } else {
        options.get(stepped - 1).cloned()
    }
}
