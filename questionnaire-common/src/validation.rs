//! Answer validation keyed on question variant

use thiserror::Error;

use crate::db::models::QuestionKind;

/// Reasons an answer is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// Not an integer, or outside `[min, max]`
    #[error("Answer must be a number between {min} and {max}")]
    OutOfRange { min: i32, max: i32 },

    /// Single-select answer is not one of the options
    #[error("Answer must be one of the available options")]
    NotAnOption,

    /// One or more multi-select tokens are not options
    #[error("One or more answers are not among the available options: {}", .invalid.join(", "))]
    UnknownSelections { invalid: Vec<String> },
}

/// Check `answer` against the rule for the question's variant
pub fn validate_answer(kind: &QuestionKind, answer: &str) -> Result<(), AnswerError> {
    match kind {
        QuestionKind::StarRating {
            min_value,
            max_value,
        } => validate_star_rating(*min_value, *max_value, answer),
        QuestionKind::SingleSelect { options } => {
            if options.iter().any(|o| o == answer) {
                Ok(())
            } else {
                Err(AnswerError::NotAnOption)
            }
        }
        QuestionKind::MultiSelect { options } => {
            let invalid: Vec<String> = split_selections(answer)
                .filter(|token| !options.iter().any(|o| o == token))
                .map(str::to_string)
                .collect();
            if invalid.is_empty() {
                Ok(())
            } else {
                Err(AnswerError::UnknownSelections { invalid })
            }
        }
    }
}

/// Split a multi-select answer into trimmed tokens
///
/// An empty answer yields a single empty token.
pub fn split_selections(answer: &str) -> impl Iterator<Item = &str> {
    answer.split(',').map(str::trim)
}

fn validate_star_rating(min: i32, max: i32, answer: &str) -> Result<(), AnswerError> {
    match answer.trim().parse::<i32>() {
        Ok(rating) if rating >= min && rating <= max => Ok(()),
        _ => Err(AnswerError::OutOfRange { min, max }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(min_value: i32, max_value: i32) -> QuestionKind {
        QuestionKind::StarRating {
            min_value,
            max_value,
        }
    }

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_star_rating_bounds_inclusive() {
        let kind = star(1, 5);
        for answer in ["1", "3", "5"] {
            assert_eq!(validate_answer(&kind, answer), Ok(()), "answer {}", answer);
        }
        for answer in ["0", "6", "-1", "100"] {
            assert_eq!(
                validate_answer(&kind, answer),
                Err(AnswerError::OutOfRange { min: 1, max: 5 }),
                "answer {}",
                answer
            );
        }
    }

    #[test]
    fn test_star_rating_rejects_non_numeric() {
        let kind = star(1, 5);
        for answer in ["", "four", "4.0", "4 stars", "99999999999"] {
            assert!(validate_answer(&kind, answer).is_err(), "answer {:?}", answer);
        }
    }

    #[test]
    fn test_star_rating_accepts_sign_and_padding() {
        assert!(validate_answer(&star(1, 5), " 4 ").is_ok());
        assert!(validate_answer(&star(1, 5), "+2").is_ok());
        assert!(validate_answer(&star(-3, 0), "-3").is_ok());
    }

    #[test]
    fn test_inverted_range_rejects_everything() {
        let kind = star(5, 1);
        for answer in ["1", "3", "5"] {
            assert!(validate_answer(&kind, answer).is_err());
        }
    }

    #[test]
    fn test_star_rating_message_includes_bounds() {
        let err = validate_answer(&star(1, 5), "6").unwrap_err();
        assert_eq!(err.to_string(), "Answer must be a number between 1 and 5");
    }

    #[test]
    fn test_single_select_exact_match() {
        let kind = QuestionKind::SingleSelect {
            options: options(&["Yes", "No"]),
        };
        assert!(validate_answer(&kind, "Yes").is_ok());
        assert!(validate_answer(&kind, "No").is_ok());
        for answer in ["Maybe", "yes", " Yes", "Yes,No", ""] {
            assert_eq!(
                validate_answer(&kind, answer),
                Err(AnswerError::NotAnOption),
                "answer {:?}",
                answer
            );
        }
    }

    #[test]
    fn test_multi_select_trims_tokens() {
        let kind = QuestionKind::MultiSelect {
            options: options(&["Red", "Blue"]),
        };
        assert!(validate_answer(&kind, "Red,Blue").is_ok());
        assert!(validate_answer(&kind, " Red ,  Blue").is_ok());
        assert!(validate_answer(&kind, "Blue").is_ok());
        assert!(validate_answer(&kind, "Red,Red").is_ok());
    }

    #[test]
    fn test_multi_select_reports_invalid_tokens() {
        let kind = QuestionKind::MultiSelect {
            options: options(&["Red", "Blue"]),
        };
        let err = validate_answer(&kind, "Red, Green, purple").unwrap_err();
        assert_eq!(
            err,
            AnswerError::UnknownSelections {
                invalid: options(&["Green", "purple"])
            }
        );
        assert!(err.to_string().ends_with("Green, purple"));
    }

    #[test]
    fn test_multi_select_empty_answer() {
        let without_empty = QuestionKind::MultiSelect {
            options: options(&["Red"]),
        };
        assert!(validate_answer(&without_empty, "").is_err());
        // trailing comma produces an empty token
        assert!(validate_answer(&without_empty, "Red,").is_err());

        let with_empty = QuestionKind::MultiSelect {
            options: options(&["Red", ""]),
        };
        assert!(validate_answer(&with_empty, "").is_ok());
        assert!(validate_answer(&with_empty, "Red,").is_ok());
    }

    #[test]
    fn test_multi_select_no_options() {
        let kind = QuestionKind::MultiSelect { options: vec![] };
        assert!(validate_answer(&kind, "anything").is_err());
    }

    #[test]
    fn test_split_selections() {
        let tokens: Vec<&str> = split_selections("a, b ,c").collect();
        assert_eq!(tokens, ["a", "b", "c"]);
        let tokens: Vec<&str> = split_selections("").collect();
        assert_eq!(tokens, [""]);
    }
}
