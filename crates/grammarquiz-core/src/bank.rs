//! Built-in question banks.
//!
//! Questions are compiled in as static tables, one per topic. Rows are turned
//! into validated [`Question`]s on load.

use crate::error::QuizError;
use crate::model::{Question, QuestionBank};

/// A static question row: prompt, options, correct option.
type Row = (&'static str, &'static [&'static str], &'static str);

/// A built-in topic.
#[derive(Debug)]
pub struct Topic {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    rows: &'static [Row],
}

impl Topic {
    pub fn question_count(&self) -> usize {
        self.rows.len()
    }

    /// Build the validated question bank for this topic.
    pub fn load(&self) -> Result<QuestionBank, QuizError> {
        let questions = self
            .rows
            .iter()
            .map(|(prompt, options, correct)| {
                Question::new(*prompt, options.iter().copied(), *correct)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuestionBank {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            questions,
        })
    }
}

/// Id of the bank that mixes every topic.
pub const MIXED_TOPIC_ID: &str = "mixed";

/// All built-in topics.
pub fn topics() -> &'static [Topic] {
    TOPICS
}

/// Look up a topic by id (case-insensitive).
pub fn find_topic(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// Load a topic's bank by id. [`MIXED_TOPIC_ID`] yields every question.
pub fn load_topic(id: &str) -> Result<QuestionBank, QuizError> {
    if id.eq_ignore_ascii_case(MIXED_TOPIC_ID) {
        return all_questions();
    }
    find_topic(id)
        .ok_or_else(|| QuizError::UnknownTopic(id.to_string()))?
        .load()
}

/// One bank holding the questions of every topic.
pub fn all_questions() -> Result<QuestionBank, QuizError> {
    let mut questions = Vec::new();
    for topic in TOPICS {
        questions.extend(topic.load()?.questions);
    }
    Ok(QuestionBank {
        id: MIXED_TOPIC_ID.to_string(),
        name: "Mixed Grammar".to_string(),
        description: "Questions from every topic".to_string(),
        questions,
    })
}

static TOPICS: &[Topic] = &[
    Topic {
        id: "articles",
        name: "Articles",
        description: "Choosing between a, an, and the",
        rows: &[
            ("I saw ___ elephant at the zoo.", &["a", "an", "the"], "an"),
            ("She wants to be ___ doctor.", &["a", "an", "the"], "a"),
            ("___ sun rises in the east.", &["A", "An", "The"], "The"),
            ("He is ___ honest man.", &["a", "an", "the"], "an"),
            ("Can you pass me ___ salt, please?", &["a", "an", "the"], "the"),
            ("We stayed in ___ hotel near the beach.", &["a", "an", "the"], "a"),
            ("It took ___ hour to get home.", &["a", "an", "the"], "an"),
            ("She plays ___ piano beautifully.", &["a", "an", "the"], "the"),
            ("My brother is ___ university student.", &["a", "an", "the"], "a"),
            ("Mount Everest is ___ highest mountain in the world.", &["a", "an", "the"], "the"),
        ],
    },
    Topic {
        id: "tenses",
        name: "Verb Tenses",
        description: "Simple, continuous, and perfect forms",
        rows: &[
            ("Yesterday I ___ to the park.", &["go", "went", "gone", "going"], "went"),
            ("She ___ TV right now.", &["watches", "is watching", "watched", "has watched"], "is watching"),
            ("They ___ in London since 2010.", &["live", "lived", "have lived", "are living"], "have lived"),
            ("Water ___ at 100 degrees Celsius.", &["boil", "boils", "is boiling", "boiled"], "boils"),
            ("By the time we arrived, the film ___.", &["started", "has started", "had started", "starts"], "had started"),
            ("I ___ you tomorrow.", &["call", "called", "will call", "have called"], "will call"),
            ("He ___ his keys. He can't find them anywhere.", &["lost", "has lost", "loses", "is losing"], "has lost"),
            ("While I ___ dinner, the phone rang.", &["cooked", "was cooking", "cook", "have cooked"], "was cooking"),
            ("Every morning she ___ a cup of tea.", &["drink", "drinks", "drank", "drinking"], "drinks"),
            ("Look at those clouds! It ___ rain.", &["is going to", "goes to", "went to", "has gone to"], "is going to"),
        ],
    },
    Topic {
        id: "plurals",
        name: "Plural Nouns",
        description: "Regular and irregular plural forms",
        rows: &[
            ("One child, two ___.", &["childs", "children", "childrens"], "children"),
            ("One mouse, three ___.", &["mouses", "mice", "mices"], "mice"),
            ("One box, four ___.", &["boxs", "boxes", "boxies"], "boxes"),
            ("One baby, two ___.", &["babys", "babies", "babyes"], "babies"),
            ("One knife, five ___.", &["knifes", "knives", "knifves"], "knives"),
            ("One tooth, many ___.", &["tooths", "teeth", "teeths"], "teeth"),
            ("One sheep, ten ___.", &["sheeps", "sheep", "sheepes"], "sheep"),
            ("One potato, two ___.", &["potatos", "potatoes", "potatoe"], "potatoes"),
            ("One woman, three ___.", &["womans", "women", "womens"], "women"),
            ("One city, two ___.", &["citys", "cities", "cityes"], "cities"),
        ],
    },
    Topic {
        id: "prepositions",
        name: "Prepositions",
        description: "in, on, at, and friends",
        rows: &[
            ("My birthday is ___ May.", &["in", "on", "at"], "in"),
            ("The meeting starts ___ 9 o'clock.", &["in", "on", "at"], "at"),
            ("We have no school ___ Sunday.", &["in", "on", "at"], "on"),
            ("The cat is hiding ___ the bed.", &["under", "between", "across"], "under"),
            ("She lives ___ Paris.", &["in", "on", "at"], "in"),
            ("The book is ___ the table.", &["in", "on", "at"], "on"),
            ("I am waiting ___ the bus stop.", &["in", "on", "at"], "at"),
            ("The bank is ___ the bakery and the library.", &["between", "among", "through"], "between"),
            ("He walked ___ the bridge to the other side.", &["across", "into", "onto"], "across"),
            ("I have lived here ___ five years.", &["since", "for", "during"], "for"),
        ],
    },
    Topic {
        id: "agreement",
        name: "Subject-Verb Agreement",
        description: "Matching verbs to their subjects",
        rows: &[
            ("The dog ___ loudly every night.", &["bark", "barks"], "barks"),
            ("My friends ___ coming to the party.", &["is", "are"], "are"),
            ("Everyone ___ a ticket.", &["need", "needs"], "needs"),
            ("Neither of the answers ___ correct.", &["is", "are"], "is"),
            ("The team ___ practising hard this week.", &["is", "were", "be"], "is"),
            ("Tom and Jerry ___ best friends.", &["is", "are", "am"], "are"),
            ("Each of the students ___ a laptop.", &["have", "has"], "has"),
            ("There ___ many reasons to learn English.", &["is", "are"], "are"),
            ("Mathematics ___ my favourite subject.", &["is", "are"], "is"),
            ("The people in the room ___ very quiet.", &["was", "were"], "were"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_builtin_topic_loads() {
        for topic in topics() {
            let bank = topic
                .load()
                .unwrap_or_else(|e| panic!("topic {} failed to load: {e}", topic.id));
            assert_eq!(bank.len(), topic.question_count());
            assert!(!bank.is_empty(), "topic {} has no questions", topic.id);
        }
    }

    #[test]
    fn topic_ids_are_unique() {
        let mut seen = HashSet::new();
        for topic in topics() {
            assert!(seen.insert(topic.id), "duplicate topic id {}", topic.id);
        }
        assert!(!seen.contains(MIXED_TOPIC_ID));
    }

    #[test]
    fn prompts_are_unique_within_topic() {
        for topic in topics() {
            let bank = topic.load().unwrap();
            let mut seen = HashSet::new();
            for q in &bank.questions {
                assert!(
                    seen.insert(q.prompt()),
                    "{}: duplicate prompt {}",
                    topic.id,
                    q.prompt()
                );
            }
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_topic("ARTICLES").map(|t| t.id), Some("articles"));
        assert!(find_topic("poetry").is_none());
    }

    #[test]
    fn unknown_topic_errors() {
        assert_eq!(
            load_topic("poetry").unwrap_err(),
            QuizError::UnknownTopic("poetry".into())
        );
    }

    #[test]
    fn mixed_bank_holds_everything() {
        let total: usize = topics().iter().map(Topic::question_count).sum();
        let mixed = load_topic("mixed").unwrap();
        assert_eq!(mixed.len(), total);
        assert_eq!(mixed.id, MIXED_TOPIC_ID);
    }
}
