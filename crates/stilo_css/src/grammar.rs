//! The grammar table: one [`Rule`] per [`Symbol`], split into the lexical
//! and composite layers, plus the build-time cycle analysis.

use crate::rule::Rule;
use crate::symbol::Symbol;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

pub mod composite;
pub mod token;

lazy_static! {
    static ref SHARED: Grammar = Grammar::build();
}

/// The grammar shared by all parser invocations. Rules are immutable once
/// built, so a single table serves concurrent parses.
pub fn shared() -> &'static Grammar {
    &SHARED
}

const UNDEFINED: Rule = Rule::Raise("undefined_rule");

pub struct Grammar {
    rules: HashMap<Symbol, Rule>,
}

impl Grammar {
    pub fn build() -> Self {
        let mut rules = HashMap::new();
        for &symbol in Symbol::ALL {
            let rule = token::define(symbol)
                .or_else(|| composite::define(symbol))
                .unwrap_or(UNDEFINED);
            rules.insert(symbol, rule);
        }
        Self { rules }
    }

    pub fn rule(&self, symbol: Symbol) -> &Rule {
        self.rules.get(&symbol).unwrap_or(&UNDEFINED)
    }

    #[cfg(test)]
    pub(crate) fn set_rule(&mut self, symbol: Symbol, rule: Rule) {
        self.rules.insert(symbol, rule);
    }

    /// Developer check for grammars that can recurse without consuming
    /// input. Reports (a) cycles of named rules reachable before any
    /// guaranteed consumption and (b) repetitions over possibly-empty
    /// bodies. A healthy grammar returns an empty list.
    pub fn analyze(&self) -> Vec<String> {
        let nullable = self.nullable_symbols();
        let mut findings = Vec::new();

        for &symbol in Symbol::ALL {
            check_repetitions(symbol, self.rule(symbol), &nullable, &mut findings);
        }

        let mut heads: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
        for &symbol in Symbol::ALL {
            let mut out = Vec::new();
            head_refs(self.rule(symbol), &nullable, &mut out);
            heads.insert(symbol, out);
        }

        let mut state: HashMap<Symbol, VisitState> = HashMap::new();
        let mut path = Vec::new();
        for &symbol in Symbol::ALL {
            visit(symbol, &heads, &mut state, &mut path, &mut findings);
        }

        findings
    }

    /// Fixpoint of the symbols whose rules can succeed without consuming.
    fn nullable_symbols(&self) -> HashSet<Symbol> {
        let mut set = HashSet::new();
        loop {
            let mut changed = false;
            for &symbol in Symbol::ALL {
                if !set.contains(&symbol) && rule_nullable(self.rule(symbol), &set) {
                    set.insert(symbol);
                    changed = true;
                }
            }
            if !changed {
                return set;
            }
        }
    }
}

fn rule_nullable(rule: &Rule, nullable: &HashSet<Symbol>) -> bool {
    match rule {
        Rule::Literal(bytes) | Rule::ILiteral(bytes) => bytes.is_empty(),
        Rule::OneOf(_)
        | Rule::NotOne(_)
        | Rule::Range(..)
        | Rule::Ranges(_)
        | Rule::WhiteSpace
        | Rule::Any => false,
        Rule::Eof => true,
        Rule::Raise(_) => false,
        Rule::Seq(rules) => rules.iter().all(|r| rule_nullable(r, nullable)),
        Rule::Sor(rules) => rules.iter().any(|r| rule_nullable(r, nullable)),
        Rule::Opt(_) | Rule::Star(_) => true,
        Rule::Plus(inner) | Rule::Must(inner) => rule_nullable(inner, nullable),
        Rule::Rep { min, rule, .. } => *min == 0 || rule_nullable(rule, nullable),
        Rule::Until { term, .. } => rule_nullable(term, nullable),
        Rule::Minus { rule, .. } => rule_nullable(rule, nullable),
        Rule::Sym(symbol) => nullable.contains(symbol),
    }
}

/// Collects the named rules reachable before this rule has necessarily
/// consumed anything; returns whether the rule itself is nullable.
fn head_refs(rule: &Rule, nullable: &HashSet<Symbol>, out: &mut Vec<Symbol>) -> bool {
    match rule {
        Rule::Sym(symbol) => {
            out.push(*symbol);
            nullable.contains(symbol)
        }
        Rule::Seq(rules) => {
            for r in rules {
                if !head_refs(r, nullable, out) {
                    return false;
                }
            }
            true
        }
        Rule::Sor(rules) => {
            let mut any_nullable = false;
            for r in rules {
                if head_refs(r, nullable, out) {
                    any_nullable = true;
                }
            }
            any_nullable
        }
        Rule::Opt(inner) | Rule::Star(inner) => {
            head_refs(inner, nullable, out);
            true
        }
        Rule::Plus(inner) | Rule::Must(inner) => head_refs(inner, nullable, out),
        Rule::Rep { min, rule, .. } => {
            let inner_nullable = head_refs(rule, nullable, out);
            *min == 0 || inner_nullable
        }
        Rule::Until { term, body } => {
            let term_nullable = head_refs(term, nullable, out);
            head_refs(body, nullable, out);
            term_nullable
        }
        // the excluded probe runs over already-consumed input
        Rule::Minus { rule, .. } => head_refs(rule, nullable, out),
        Rule::Literal(bytes) | Rule::ILiteral(bytes) => bytes.is_empty(),
        Rule::Eof => true,
        _ => false,
    }
}

fn check_repetitions(
    symbol: Symbol,
    rule: &Rule,
    nullable: &HashSet<Symbol>,
    findings: &mut Vec<String>,
) {
    match rule {
        Rule::Star(inner) | Rule::Plus(inner) => {
            if rule_nullable(inner, nullable) {
                findings.push(format!(
                    "{}: repetition over a possibly empty rule",
                    symbol.name()
                ));
            }
            check_repetitions(symbol, inner, nullable, findings);
        }
        Rule::Until { term, body } => {
            if rule_nullable(body, nullable) {
                findings.push(format!(
                    "{}: until-body can match without progress",
                    symbol.name()
                ));
            }
            check_repetitions(symbol, term, nullable, findings);
            check_repetitions(symbol, body, nullable, findings);
        }
        Rule::Rep { rule: inner, .. } => {
            if rule_nullable(inner, nullable) {
                findings.push(format!(
                    "{}: repetition over a possibly empty rule",
                    symbol.name()
                ));
            }
            check_repetitions(symbol, inner, nullable, findings);
        }
        Rule::Opt(inner) | Rule::Must(inner) => check_repetitions(symbol, inner, nullable, findings),
        Rule::Minus { rule: inner, excluded } => {
            check_repetitions(symbol, inner, nullable, findings);
            check_repetitions(symbol, excluded, nullable, findings);
        }
        Rule::Seq(rules) | Rule::Sor(rules) => {
            for r in rules {
                check_repetitions(symbol, r, nullable, findings);
            }
        }
        _ => {}
    }
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Active,
    Done,
}

fn visit(
    symbol: Symbol,
    heads: &HashMap<Symbol, Vec<Symbol>>,
    state: &mut HashMap<Symbol, VisitState>,
    path: &mut Vec<Symbol>,
    findings: &mut Vec<String>,
) {
    match state.get(&symbol) {
        Some(VisitState::Done) => return,
        Some(VisitState::Active) => {
            let start = path.iter().position(|&s| s == symbol).unwrap_or(0);
            let cycle: Vec<&str> = path[start..]
                .iter()
                .chain(std::iter::once(&symbol))
                .map(|s| s.name())
                .collect();
            findings.push(format!("cycle without progress: {}", cycle.join(" -> ")));
            return;
        }
        None => {}
    }

    state.insert(symbol, VisitState::Active);
    path.push(symbol);
    if let Some(refs) = heads.get(&symbol) {
        for &next in refs {
            visit(next, heads, state, path, findings);
        }
    }
    path.pop();
    state.insert(symbol, VisitState::Done);
}
