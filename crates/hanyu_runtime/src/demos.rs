//! Built-in demonstration sentences.
//!
//! Each demo builds a tree with the factory and returns its root. The
//! `hanyu` binary realises them by name.

use hanyu_foundation::{
    Error, Feature, Gender, InterrogativeType, LexicalCategory, NodeId, Number, Result, Tense,
};
use hanyu_tree::Tree;

use crate::serialize::Document;

/// A named demo.
#[derive(Copy, Clone)]
pub struct Demo {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    build: fn(&mut Tree) -> Result<NodeId>,
}

impl Demo {
    /// Builds the demo into a fresh tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the factory rejects a step.
    pub fn document(&self) -> Result<Document> {
        let mut tree = Tree::new();
        let root = (self.build)(&mut tree)?;
        Ok(Document::new(tree, root))
    }
}

impl std::fmt::Debug for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo").field("name", &self.name).finish()
    }
}

/// All demos, in listing order.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "plain",
        description: "subject, verb, object",
        build: plain,
    },
    Demo {
        name: "negated",
        description: "negation before the verb",
        build: negated,
    },
    Demo {
        name: "modal",
        description: "modal with the 没 negation",
        build: modal,
    },
    Demo {
        name: "future",
        description: "future tense takes the future modal",
        build: future,
    },
    Demo {
        name: "passive",
        description: "object fronted by 被, negated",
        build: passive,
    },
    Demo {
        name: "ba",
        description: "object fronted by 把",
        build: ba,
    },
    Demo {
        name: "specifiers",
        description: "pronoun, demonstrative, numeral and classifier",
        build: specifiers,
    },
    Demo {
        name: "pronoun",
        description: "pronominal phrase of mixed gender",
        build: pronoun,
    },
    Demo {
        name: "coordination",
        description: "coordinated subjects",
        build: coordination,
    },
    Demo {
        name: "yes-no",
        description: "yes/no question with 吗",
        build: yes_no,
    },
    Demo {
        name: "who",
        description: "passive question about the agent",
        build: who,
    },
    Demo {
        name: "how-many",
        description: "passive question about a quantity",
        build: how_many,
    },
    Demo {
        name: "how",
        description: "question about the predicate",
        build: how,
    },
];

/// Looks a demo up by name.
///
/// # Errors
///
/// Returns `InvalidArgument` naming the unknown demo.
pub fn find(name: &str) -> Result<&'static Demo> {
    DEMOS
        .iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| Error::invalid_argument(format!("unknown demo: {name}")))
}

// =============================================================================
// Builders
// =============================================================================

fn hit(tree: &mut Tree) -> Result<NodeId> {
    let he = tree.noun_phrase("他");
    let hit = tree.verb_phrase("打");
    let ming = tree.noun_phrase("小明");
    tree.clause(Some(he), Some(hit), Some(ming))
}

fn plain(tree: &mut Tree) -> Result<NodeId> {
    hit(tree)
}

fn negated(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::Negated, true)?;
    Ok(clause)
}

fn modal(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::Modal, "应该")?;
    tree.set_clause_feature(clause, Feature::Negated, true)?;
    tree.set_clause_feature(clause, Feature::NegationWord, "没")?;
    Ok(clause)
}

fn future(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::Tense, Tense::Future)?;
    Ok(clause)
}

fn passive(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::Passive, true)?;
    tree.set_clause_feature(clause, Feature::Negated, true)?;
    Ok(clause)
}

fn ba(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::Ba, true)?;
    Ok(clause)
}

fn specifiers(tree: &mut Tree) -> Result<NodeId> {
    let students = tree.noun_phrase("学生");
    tree.set_feature(students, Feature::Number, Number::Plural);
    for (base, category) in [
        ("他", LexicalCategory::Pronoun),
        ("那", LexicalCategory::Demonstrative),
        ("两", LexicalCategory::Numeral),
        ("个", LexicalCategory::Classifier),
    ] {
        let word = tree.word(base, category);
        tree.add_specifier(students, word)?;
    }
    Ok(students)
}

fn pronoun(tree: &mut Tree) -> Result<NodeId> {
    let people = tree.noun_phrase("人");
    tree.set_feature(people, Feature::Gender, Gender::Mixed);
    tree.set_feature(people, Feature::Number, Number::Plural);
    tree.set_feature(people, Feature::Pronominal, true);
    let come = tree.verb_phrase("来");
    tree.clause(Some(people), Some(come), None)
}

fn coordination(tree: &mut Tree) -> Result<NodeId> {
    let ming = tree.noun_phrase("小明");
    let meili = tree.noun_phrase("王美丽");
    let both = tree.coordination(&[ming, meili]);
    let hit = tree.verb_phrase("打");
    let he = tree.noun_phrase("他");
    tree.clause(Some(both), Some(hit), Some(he))
}

fn yes_no(tree: &mut Tree) -> Result<NodeId> {
    let clause = hit(tree)?;
    tree.set_clause_feature(clause, Feature::InterrogativeType, InterrogativeType::YesNo)?;
    Ok(clause)
}

fn who(tree: &mut Tree) -> Result<NodeId> {
    let ming = tree.noun_phrase("小明");
    let kiss = tree.verb_phrase("亲 了");
    let meili = tree.noun_phrase("王美丽");
    let clause = tree.clause(Some(ming), Some(kiss), Some(meili))?;
    tree.set_clause_feature(clause, Feature::Passive, true)?;
    tree.set_clause_feature(
        clause,
        Feature::InterrogativeType,
        InterrogativeType::WhoSubject,
    )?;
    Ok(clause)
}

fn how_many(tree: &mut Tree) -> Result<NodeId> {
    let ming = tree.noun_phrase("小明");
    let hit = tree.verb_phrase("打 了");
    let people = tree.noun_phrase("人");
    let clause = tree.clause(Some(ming), Some(hit), Some(people))?;
    tree.set_clause_feature(clause, Feature::Passive, true)?;
    tree.set_clause_feature(
        clause,
        Feature::InterrogativeType,
        InterrogativeType::HowManyObject,
    )?;
    Ok(clause)
}

fn how(tree: &mut Tree) -> Result<NodeId> {
    let ming = tree.noun_phrase("小明");
    let hit = tree.verb_phrase("打");
    let clause = tree.clause(Some(ming), Some(hit), None)?;
    tree.set_clause_feature(
        clause,
        Feature::InterrogativeType,
        InterrogativeType::HowPredicate,
    )?;
    Ok(clause)
}
