/// Number of points on the ordinal scales (bipolar and Likert).
pub const SCALE_POINTS: u8 = 7;

/// Label on the lowest Likert point.
pub const LIKERT_LOW_LABEL: &str = "Strongly disagree";

/// Label on the highest Likert point.
pub const LIKERT_HIGH_LABEL: &str = "Strongly agree";

/// One selectable option of a choice widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// The answer string written into the response map on selection.
    pub value: String,

    /// The label shown next to the option.
    pub label: String,
}

impl ChoiceOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The values of a 7-point scale: `"1"` through `"7"`.
pub fn scale_values() -> Vec<String> {
    (1..=SCALE_POINTS).map(|point| point.to_string()).collect()
}

/// The fixed yes/no pair used by the binary widget.
pub fn binary_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("yes", "Yes"),
        ChoiceOption::new("no", "No"),
    ]
}

/// The rendering/interaction mode of a question.
///
/// Exactly one widget applies per question; classification precedence
/// lives in the engine. Every widget writes a single string answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionWidget {
    /// Single choice among dynamically computed player names.
    FinalGuess,

    /// Yes/no choice (message-strength section).
    Binary,

    /// Single choice among options parsed from an inline legend like
    /// "1=Never, 2=Sometimes, 3=Always".
    NumberedChoice(Vec<ChoiceOption>),

    /// 7-point scale labeled only at the two semantic extremes.
    BipolarScale { low: String, high: String },

    /// 7-point agree/disagree scale.
    Likert,
}

impl QuestionWidget {
    /// Check if this widget is one of the 7-point scales.
    pub fn is_scale(&self) -> bool {
        matches!(self, Self::BipolarScale { .. } | Self::Likert)
    }

    /// The options of widgets with a fixed choice set.
    ///
    /// `FinalGuess` returns `None`: its candidates come from the game
    /// transcript, not from the widget itself.
    pub fn fixed_options(&self) -> Option<Vec<ChoiceOption>> {
        match self {
            Self::FinalGuess => None,
            Self::Binary => Some(binary_options()),
            Self::NumberedChoice(options) => Some(options.clone()),
            Self::BipolarScale { low, high } => Some(scale_options(low, high)),
            Self::Likert => Some(scale_options(LIKERT_LOW_LABEL, LIKERT_HIGH_LABEL)),
        }
    }

    /// Check if the given answer string is one this widget can produce.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::FinalGuess => !value.is_empty(),
            other => other
                .fixed_options()
                .is_some_and(|options| options.iter().any(|option| option.value == value)),
        }
    }
}

fn scale_options(low: &str, high: &str) -> Vec<ChoiceOption> {
    scale_values()
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            // Only the extremes carry the semantic labels; the middle
            // points are labeled by their number.
            let label = if index == 0 {
                low.to_string()
            } else if index == usize::from(SCALE_POINTS) - 1 {
                high.to_string()
            } else {
                value.clone()
            };
            ChoiceOption { value, label }
        })
        .collect()
}
