use ecolearn_types::{LessonId, Question, QuizDefinition};

use crate::indexed_options;

/// Quiz for the "Waste Management Solutions" lesson.
pub fn waste_management() -> QuizDefinition {
    QuizDefinition::new(
        LessonId::new(2),
        vec![
            Question::new(
                "3",
                "What does the \"Three Rs\" stand for in waste management?",
                indexed_options([
                    "Reduce, Reuse, Recycle",
                    "Repair, Reuse, Recycle",
                    "Reduce, Repair, Recycle",
                    "Reuse, Recycle, Recover",
                ]),
            ),
            Question::new(
                "4",
                "What type of waste is best for composting?",
                indexed_options([
                    "Plastic bottles",
                    "Food scraps and yard waste",
                    "Electronic waste",
                    "Glass jars",
                ]),
            ),
        ],
    )
}
