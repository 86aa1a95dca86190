// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Euler codes: diagrams made of several connected components.
//!
//! Each component has its own Gauss code and outer face, and optionally
//! names the face of another component it is drawn inside. Symbol labels
//! are unique across components, so the component owning a face can be
//! found from its labels.
//!
//! The text form has one block per component, separated by blank lines:
//!
//! ```text
//! d_1: [A, B]; within: 0; outer: {(1- 2+,-),(2- 1+,-)}
//! A: 1- 2+
//! B: 1+ 2-
//!
//! d_2: [C]; within: {(1- 2+,+),(1+ 2-,-)}; outer: {(3+ 3+,+)}
//! C: 3+
//! ```

use crate::code::{Face, GaussCode};
use crate::error::{CodeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One connected component of an Euler code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub code: GaussCode,
    /// Face of another component this one is drawn inside; `None` at top level.
    pub within: Option<Face>,
    pub outer: Face,
}

/// Components with acyclic nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerCode {
    components: Vec<Component>,
}

impl EulerCode {
    /// Fails with [`CodeError::UnknownFace`] if a `within` face belongs to no
    /// component, or [`CodeError::CyclicNesting`] if nesting loops.
    pub fn new(components: Vec<Component>) -> Result<Self> {
        let code = Self { components };
        let parents = code.parents()?;
        for start in 0..parents.len() {
            let mut current = start;
            for _ in 0..parents.len() {
                match parents[current] {
                    Some(p) if p == start => return Err(CodeError::CyclicNesting(start)),
                    Some(p) => current = p,
                    None => break,
                }
            }
        }
        Ok(code)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component each component is nested in.
    pub fn parents(&self) -> Result<Vec<Option<usize>>> {
        let mut owner: HashMap<&str, usize> = HashMap::new();
        for (i, component) in self.components.iter().enumerate() {
            for label in component
                .code
                .curves()
                .iter()
                .flat_map(|c| c.word.iter())
                .map(|s| s.label())
            {
                owner.insert(label, i);
            }
        }
        self.components
            .iter()
            .map(|component| match &component.within {
                None => Ok(None),
                Some(face) => face
                    .segments()
                    .first()
                    .and_then(|s| owner.get(s.first.label()))
                    .map(|&i| Some(i))
                    .ok_or_else(|| CodeError::UnknownFace(face.to_string())),
            })
            .collect()
    }
}

fn offset_line(err: CodeError, offset: usize) -> CodeError {
    match err {
        CodeError::Format { line, message } => CodeError::Format {
            line: line + offset,
            message,
        },
        other => other,
    }
}

fn parse_component(lines: &[(usize, &str)]) -> Result<Component> {
    let (header_line, header) = lines[0];
    let parts: Vec<&str> = header.split(';').map(str::trim).collect();
    let [_, within, outer] = parts[..] else {
        return Err(CodeError::format(header_line, "Unparseable component header"));
    };
    let within = within
        .strip_prefix("within:")
        .map(str::trim)
        .ok_or_else(|| CodeError::format(header_line, "Missing within"))?;
    let within = match within {
        "0" => None,
        face => Some(Face::parse_line(face, header_line)?),
    };
    let outer = outer
        .strip_prefix("outer:")
        .ok_or_else(|| CodeError::format(header_line, "Missing outer"))?;
    let outer = Face::parse_line(outer, header_line)?;

    let body: Vec<&str> = lines[1..].iter().map(|(_, l)| *l).collect();
    let code = body
        .join("\n")
        .parse::<GaussCode>()
        .map_err(|e| offset_line(e, header_line))?;
    Ok(Component {
        code,
        within,
        outer,
    })
}

impl FromStr for EulerCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut blocks: Vec<Vec<(usize, &str)>> = vec![Vec::new()];
        for (i, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                if blocks.last().is_some_and(|b| !b.is_empty()) {
                    blocks.push(Vec::new());
                }
            } else if let Some(block) = blocks.last_mut() {
                block.push((i + 1, line));
            }
        }
        let components = blocks
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| parse_component(b))
            .collect::<Result<Vec<_>>>()?;
        EulerCode::new(components)
    }
}

impl fmt::Display for EulerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            let labels: Vec<&str> = component.code.labels().collect();
            write!(f, "d_{}: [{}]; within: ", i + 1, labels.join(", "))?;
            match &component.within {
                None => write!(f, "0")?,
                Some(face) => write!(f, "{}", face)?,
            }
            write!(f, "; outer: {}\n{}", component.outer, component.code)?;
        }
        Ok(())
    }
}
