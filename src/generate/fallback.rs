//! Fixed survey and user sets used when no language model is available.

use std::collections::BTreeMap;

use super::types::{Answer, Question, QuestionKind, Response, Role, Survey, SurveyType, User};

const USERS: &[(&str, &str, Role)] = &[
    ("alice.johnson@company.com", "Alice Johnson", Role::Owner),
    ("bob.smith@company.com", "Bob Smith", Role::Manager),
    ("carol.williams@company.com", "Carol Williams", Role::Owner),
    ("david.brown@company.com", "David Brown", Role::Manager),
    ("emma.davis@company.com", "Emma Davis", Role::Manager),
    ("frank.miller@company.com", "Frank Miller", Role::Owner),
    ("grace.wilson@company.com", "Grace Wilson", Role::Manager),
    ("henry.moore@company.com", "Henry Moore", Role::Owner),
    ("iris.taylor@company.com", "Iris Taylor", Role::Manager),
    ("jack.anderson@company.com", "Jack Anderson", Role::Manager),
];

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|(email, name, role)| User {
            email: email.to_string(),
            name: name.to_string(),
            role: *role,
        })
        .collect()
}

fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

fn choices(values: &[&str]) -> QuestionKind {
    QuestionKind::MultipleChoice {
        choices: values.iter().map(|v| v.to_string()).collect(),
    }
}

/// Two questions plus one response answering both, keyed by the fresh question ids.
fn survey(
    name: &str,
    description: &str,
    survey_type: SurveyType,
    questions: [(&str, QuestionKind, Answer); 2],
) -> Survey {
    let mut data = BTreeMap::new();
    let questions = questions
        .into_iter()
        .map(|(headline, kind, answer)| {
            let q = Question::new(headline, kind);
            data.insert(q.id.clone(), answer);
            q
        })
        .collect();
    Survey {
        name: name.to_string(),
        description: description.to_string(),
        survey_type,
        questions,
        responses: vec![Response { data }],
    }
}

pub fn surveys() -> Vec<Survey> {
    vec![
        survey(
            "Product Feedback Survey",
            "Help us improve our product",
            SurveyType::Form,
            [
                (
                    "How likely are you to recommend our product?",
                    QuestionKind::Nps { scale: 10 },
                    Answer::Integer(9),
                ),
                (
                    "Which features do you use most?",
                    choices(&["Dashboard", "Reports", "Integrations", "API"]),
                    text("Dashboard"),
                ),
            ],
        ),
        survey(
            "Customer Satisfaction",
            "Rate your experience with us",
            SurveyType::Survey,
            [
                (
                    "How satisfied are you?",
                    QuestionKind::Rating { scale: 5 },
                    Answer::Integer(4),
                ),
                (
                    "What could we improve?",
                    QuestionKind::OpenText,
                    text("Better documentation needed"),
                ),
            ],
        ),
        survey(
            "Feature Request",
            "Tell us what features you'd like",
            SurveyType::Form,
            [
                (
                    "What feature would help you most?",
                    QuestionKind::OpenText,
                    text("Mobile app support"),
                ),
                (
                    "Priority level",
                    choices(&["Low", "Medium", "High", "Critical"]),
                    text("High"),
                ),
            ],
        ),
        survey(
            "Support Quality",
            "Rate our support team",
            SurveyType::Survey,
            [
                (
                    "How would you rate our support?",
                    QuestionKind::Rating { scale: 5 },
                    Answer::Integer(5),
                ),
                (
                    "Additional feedback",
                    QuestionKind::OpenText,
                    text("Great team, very responsive"),
                ),
            ],
        ),
        survey(
            "User Experience",
            "Help us understand your experience",
            SurveyType::Form,
            [
                (
                    "How did you hear about us?",
                    choices(&["Search", "Social Media", "Referral", "Ad"]),
                    text("Search"),
                ),
                (
                    "Your experience so far",
                    QuestionKind::OpenText,
                    text("Smooth onboarding, easy to use"),
                ),
            ],
        ),
    ]
}
