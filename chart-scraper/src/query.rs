//! Structural document queries
//!
//! A [`NodeQuery`] is a chain of tag/class predicates joined by descendant
//! or direct-child combinators. Extraction code only talks to documents
//! through the [`ChartNode`] trait; [`HtmlNode`] is the `scraper`-backed
//! implementation, which compiles queries to CSS selectors.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// How a step relates to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Anywhere below the previous match
    Descendant,
    /// Immediate child of the previous match
    Child,
}

/// Element predicate: optional tag name plus required classes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Predicate {
    pub tag: Option<String>,
    pub classes: Vec<String>,
}

impl Predicate {
    pub fn tag(name: &str) -> Self {
        Self {
            tag: Some(name.to_string()),
            classes: Vec::new(),
        }
    }

    pub fn class(name: &str) -> Self {
        Self {
            tag: None,
            classes: vec![name.to_string()],
        }
    }

    /// Additionally require `name` in the class list
    pub fn and_class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}", tag)?,
            None if self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    combinator: Combinator,
    predicate: Predicate,
}

/// Chain of predicates evaluated relative to a starting node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeQuery {
    steps: Vec<Step>,
}

impl NodeQuery {
    /// Query whose first step matches `predicate` anywhere below the start
    pub fn find(predicate: Predicate) -> Self {
        Self::default().descendant(predicate)
    }

    pub fn descendant(mut self, predicate: Predicate) -> Self {
        self.steps.push(Step {
            combinator: Combinator::Descendant,
            predicate,
        });
        self
    }

    pub fn child(mut self, predicate: Predicate) -> Self {
        self.steps.push(Step {
            combinator: Combinator::Child,
            predicate,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// CSS selector form, e.g. `.ellipsis.rank02 > a`
impl fmt::Display for NodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                match step.combinator {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                }
            }
            write!(f, "{}", step.predicate)?;
        }
        Ok(())
    }
}

/// Read access to a document element
pub trait ChartNode: Sized {
    /// All matches of `query` below this node, in document order
    fn select(&self, query: &NodeQuery) -> Result<Vec<Self>>;

    /// Value of attribute `name`
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text content, trimmed
    fn text(&self) -> String;

    /// First match of `query` below this node
    fn select_first(&self, query: &NodeQuery) -> Result<Option<Self>> {
        Ok(self.select(query)?.into_iter().next())
    }
}

/// [`ChartNode`] over a parsed `scraper` document
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlNode<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Root element of a parsed document
    pub fn root(document: &'a Html) -> Self {
        Self::new(document.root_element())
    }
}

fn compile(query: &NodeQuery) -> Result<Selector> {
    if query.is_empty() {
        return Err(ScrapeError::Selector(String::new(), "empty query".to_string()));
    }
    let css = query.to_string();
    Selector::parse(&css).map_err(|e| ScrapeError::Selector(css.clone(), format!("{:?}", e)))
}

impl<'a> ChartNode for HtmlNode<'a> {
    fn select(&self, query: &NodeQuery) -> Result<Vec<Self>> {
        let selector = compile(query)?;
        Ok(self.element.select(&selector).map(HtmlNode::new).collect())
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}
