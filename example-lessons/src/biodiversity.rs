use ecolearn_types::{LessonId, Question, QuizDefinition};

use crate::indexed_options;

/// Quiz for the "Biodiversity Conservation" lesson.
pub fn biodiversity() -> QuizDefinition {
    QuizDefinition::new(
        LessonId::new(3),
        vec![
            Question::new(
                "5",
                "What is biodiversity?",
                indexed_options([
                    "Number of species in an area",
                    "Variety of life on Earth",
                    "Size of ecosystems",
                    "Amount of pollution",
                ]),
            ),
            Question::new(
                "6",
                "Which of these is NOT a benefit of biodiversity?",
                indexed_options([
                    "Provides food and medicine",
                    "Regulates climate",
                    "Increases pollution",
                    "Supports soil fertility",
                ]),
            ),
        ],
    )
}
