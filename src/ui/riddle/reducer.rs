use crate::ui::mvi::Reducer;
use crate::ui::riddle::intent::QuizIntent;
use crate::ui::riddle::state::QuizState;

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::Loaded { quiz } => {
                if quiz.questions.is_empty() {
                    QuizState::Complete { score: 0, total: 0 }
                } else {
                    QuizState::Active {
                        quiz,
                        current: 0,
                        selected: None,
                        score: 0,
                    }
                }
            }
            QuizIntent::Select { answer } => match state {
                QuizState::Active {
                    quiz,
                    current,
                    selected: None,
                    score,
                } => {
                    let correct = quiz
                        .questions
                        .get(current)
                        .is_some_and(|q| q.correct_answer == answer);
                    QuizState::Active {
                        quiz,
                        current,
                        selected: Some(answer),
                        score: if correct { score + 1 } else { score },
                    }
                }
                other => other,
            },
            QuizIntent::Advance => match state {
                QuizState::Active {
                    quiz,
                    current,
                    selected: Some(_),
                    score,
                } => {
                    if current + 1 < quiz.questions.len() {
                        QuizState::Active {
                            quiz,
                            current: current + 1,
                            selected: None,
                            score,
                        }
                    } else {
                        QuizState::Complete {
                            score,
                            total: quiz.questions.len(),
                        }
                    }
                }
                other => other,
            },
            QuizIntent::Reset => QuizState::Loading,
        }
    }
}
