use serde::{Deserialize, Serialize};

use crate::markup::Token;

/// A node of a parsed structured message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Text(String),
    Variable(String),
    /// `#` inside a plural branch: the enclosing plural's count.
    Hash,
    Plural { variable: String, branches: Vec<Branch> },
}

/// One `category {content}` branch of a plural node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub category: String,
    pub content: Vec<Node>,
}

impl Node {
    /// Project markup tokens onto the node tree their rendering parses back
    /// to. Adjacent text is merged, matching what the parser produces.
    pub fn from_tokens(tokens: &[Token]) -> Vec<Node> {
        let mut nodes: Vec<Node> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let node = match token {
                Token::Text(text) => {
                    if let Some(Node::Text(previous)) = nodes.last_mut() {
                        previous.push_str(text);
                        continue;
                    }
                    Node::Text(text.clone())
                }
                Token::Variable(name) => Node::Variable(name.clone()),
                Token::SelectorRef(_) => Node::Hash,
                Token::PluralBlock(block) => Node::Plural {
                    variable: block.selector.clone(),
                    branches: block
                        .forms
                        .iter()
                        .map(|form| Branch {
                            category: form.category.clone(),
                            content: Node::from_tokens(&form.content),
                        })
                        .collect(),
                },
            };
            nodes.push(node);
        }
        nodes
    }

    /// Names of every variable referenced in `nodes`, plural selectors
    /// included, in first-seen order without duplicates.
    pub fn variables(nodes: &[Node]) -> Vec<&str> {
        let mut names = Vec::new();
        collect_variables(nodes, &mut names);
        names
    }
}

fn collect_variables<'a>(nodes: &'a [Node], names: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            Node::Variable(name) => push_unique(names, name),
            Node::Plural { variable, branches } => {
                push_unique(names, variable);
                for branch in branches {
                    collect_variables(&branch.content, names);
                }
            }
            Node::Text(_) | Node::Hash => {}
        }
    }
}

fn push_unique<'a>(names: &mut Vec<&'a str>, name: &'a str) {
    if !names.contains(&name) {
        names.push(name);
    }
}
