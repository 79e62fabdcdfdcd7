//! Answer-widget selection.
//!
//! Replaces the original render-time branch chain with a pure classifier:
//! section key and normalized text map to exactly one `QuestionWidget`.

use debrief_types::{
    FINAL_GUESS_KEY, MESSAGE_STRENGTH_KEY, Question, QuestionWidget, ResponseKey, SectionGroup,
};

use crate::text::NormalizedQuestion;

/// Select the widget for a question, by precedence:
///
/// 1. `final_guess` section: player-name choice, regardless of text.
/// 2. `message_strength` section: binary yes/no.
/// 3. A parsed numbered legend: choice among its options.
/// 4. Bipolar endpoints in the display label: 7-point bipolar scale.
/// 5. Otherwise: 7-point Likert scale.
pub fn classify(section_key: &str, raw_text: &str) -> QuestionWidget {
    widget_for(section_key, NormalizedQuestion::parse(raw_text))
}

fn widget_for(section_key: &str, parsed: NormalizedQuestion) -> QuestionWidget {
    if section_key == FINAL_GUESS_KEY {
        return QuestionWidget::FinalGuess;
    }
    if section_key == MESSAGE_STRENGTH_KEY {
        return QuestionWidget::Binary;
    }
    if let Some(options) = parsed.numbered_options {
        return QuestionWidget::NumberedChoice(options);
    }
    if let Some((low, high)) = parsed.bipolar_ends {
        return QuestionWidget::BipolarScale { low, high };
    }
    QuestionWidget::Likert
}

/// Everything the UI needs to render one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// The answer-map key to read and write.
    pub response_key: ResponseKey,

    /// The cleaned label text (conditional prefix and legend stripped).
    pub label: String,

    /// The selected widget.
    pub widget: QuestionWidget,
}

/// Build the render view of one question.
pub fn question_view(section_key: &str, question: &Question) -> QuestionView {
    let parsed = NormalizedQuestion::parse(question.text());
    let label = parsed.display_label.clone();
    QuestionView {
        response_key: question.response_key().clone(),
        label,
        widget: widget_for(section_key, parsed),
    }
}

/// The render view of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// The section key (drives per-section UI framing).
    pub key: String,

    /// The question views in schema order.
    pub questions: Vec<QuestionView>,
}

/// Build the render view of a whole section.
pub fn section_view(section: &SectionGroup) -> SectionView {
    SectionView {
        key: section.key().to_string(),
        questions: section
            .questions()
            .iter()
            .map(|question| question_view(section.key(), question))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debrief_types::ChoiceOption;

    #[test]
    fn final_guess_wins_over_text_patterns() {
        // Even legend-shaped text stays a final-guess widget.
        let widget = classify(FINAL_GUESS_KEY, "Pick one: 1=Mia, 2=Noah");
        assert_eq!(widget, QuestionWidget::FinalGuess);
    }

    #[test]
    fn message_strength_is_binary() {
        let widget = classify(MESSAGE_STRENGTH_KEY, "Boring ↔ Exciting");
        assert_eq!(widget, QuestionWidget::Binary);
    }

    #[test]
    fn numbered_legend_beats_bipolar() {
        let widget = classify("trust_ai", "Low ↔ High? 1=Never, 2=Always");
        assert!(matches!(widget, QuestionWidget::NumberedChoice(_)));
    }

    #[test]
    fn bipolar_text_yields_bipolar_scale() {
        let widget = classify("experience", "Boring ↔ Exciting");
        assert_eq!(
            widget,
            QuestionWidget::BipolarScale {
                low: "Boring".to_string(),
                high: "Exciting".to_string(),
            }
        );
    }

    #[test]
    fn plain_statements_fall_back_to_likert() {
        assert_eq!(
            classify("ai_perception", "The agents were persuasive."),
            QuestionWidget::Likert
        );
    }

    #[test]
    fn question_view_cleans_the_label() {
        let question = Question::new(
            "trust_ai",
            "T2",
            "(Only if U1 = Yes) How often did you rely on advice? 1=Never, 2=Sometimes, 3=Always",
        );
        let view = question_view("trust_ai", &question);
        assert_eq!(view.label, "How often did you rely on advice?");
        assert_eq!(
            view.widget,
            QuestionWidget::NumberedChoice(vec![
                ChoiceOption::new("1", "Never"),
                ChoiceOption::new("2", "Sometimes"),
                ChoiceOption::new("3", "Always"),
            ])
        );
        assert_eq!(view.response_key.as_str(), "trust_ai.T2");
    }
}
