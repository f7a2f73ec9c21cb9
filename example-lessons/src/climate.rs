use ecolearn_types::{LessonId, Question, QuizDefinition};

use crate::indexed_options;

/// Quiz for the "Introduction to Climate Change" lesson.
pub fn climate_change() -> QuizDefinition {
    QuizDefinition::new(
        LessonId::new(1),
        vec![
            Question::new(
                "1",
                "What is the primary driver of climate change since the 1800s?",
                indexed_options([
                    "Natural processes",
                    "Burning fossil fuels",
                    "Solar activity",
                    "Volcanic eruptions",
                ]),
            ),
            Question::new(
                "2",
                "Which of these is NOT a key impact of climate change?",
                indexed_options([
                    "Rising sea levels",
                    "More frequent extreme weather",
                    "Increased biodiversity",
                    "Changes in agriculture",
                ]),
            ),
        ],
    )
}
