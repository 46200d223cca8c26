// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Binary Integer Model
//!
//! A maximizing 0/1 linear program: binary decision variables, each with an
//! objective coefficient, plus linear constraint rows. Built once per
//! optimization run through [`BinaryModelBuilder`], which validates eagerly
//! so a solver never sees an inconsistent model.

use crate::num::{solution_tolerance, ObjectiveNumeric};
use num_traits::ToPrimitive;
use smallvec::SmallVec;
use trestle_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for decision-variable indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VariableIndexTag;

impl TypedIndexTag for VariableIndexTag {
    const NAME: &'static str = "VarId";
}

/// A typed index for binary decision variables.
pub type VarId = TypedIndex<VariableIndexTag>;

/// A tag type for constraint-row indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndexTag;

impl TypedIndexTag for RowIndexTag {
    const NAME: &'static str = "RowId";
}

/// A typed index for constraint rows.
pub type RowId = TypedIndex<RowIndexTag>;

/// Errors raised while assembling a model. These describe malformed input,
/// never the absence of a solution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("variable index {var} is out of range: the model has {num_variables} variables")]
    VariableOutOfRange { var: usize, num_variables: usize },
    #[error("non-finite coefficient {value} in {context}")]
    NonFiniteCoefficient { context: String, value: f64 },
}

/// The comparison sense of a constraint row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowSense {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl std::fmt::Display for RowSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowSense::Equal => write!(f, "="),
            RowSense::LessOrEqual => write!(f, "<="),
            RowSense::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// A single `coefficient * variable` term of a linear row.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LinTerm<W> {
    pub var: VarId,
    pub coefficient: W,
}

impl<W> LinTerm<W> {
    #[inline]
    pub const fn new(var: VarId, coefficient: W) -> Self {
        Self { var, coefficient }
    }
}

/// The term storage of a linear row. Linearization rows carry two or three
/// terms, so small rows stay inline.
pub type LinTerms<W> = SmallVec<[LinTerm<W>; 4]>;

/// A linear constraint row `Σ coefficient · variable ⋈ rhs`.
#[derive(Clone, PartialEq, Debug)]
pub struct LinearConstraint<W> {
    name: String,
    terms: LinTerms<W>,
    sense: RowSense,
    rhs: W,
}

impl<W> LinearConstraint<W>
where
    W: ObjectiveNumeric,
{
    /// Creates an equality row `Σ terms = rhs`.
    #[inline]
    pub fn equal<N>(name: N, terms: LinTerms<W>, rhs: W) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            terms,
            sense: RowSense::Equal,
            rhs,
        }
    }

    /// Creates an upper-bound row `Σ terms <= rhs`.
    #[inline]
    pub fn at_most<N>(name: N, terms: LinTerms<W>, rhs: W) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            terms,
            sense: RowSense::LessOrEqual,
            rhs,
        }
    }

    /// Creates a lower-bound row `Σ terms >= rhs`.
    #[inline]
    pub fn at_least<N>(name: N, terms: LinTerms<W>, rhs: W) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            terms,
            sense: RowSense::GreaterOrEqual,
            rhs,
        }
    }

    /// Returns the diagnostic name of this row.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the terms of this row.
    #[inline]
    pub fn terms(&self) -> &[LinTerm<W>] {
        &self.terms
    }

    /// Returns the comparison sense of this row.
    #[inline]
    pub fn sense(&self) -> RowSense {
        self.sense
    }

    /// Returns the right-hand side of this row.
    #[inline]
    pub fn rhs(&self) -> W {
        self.rhs
    }

    /// Evaluates the left-hand side under the given 0/1 assignment and
    /// checks the row within the shared solution tolerance.
    pub fn is_satisfied(&self, values: &[bool]) -> bool {
        let lhs = self
            .terms
            .iter()
            .filter(|term| values[term.var.get()])
            .fold(W::zero(), |acc, term| acc + term.coefficient);
        let tolerance = solution_tolerance::<W>();

        match self.sense {
            RowSense::Equal => (lhs - self.rhs).abs() <= tolerance,
            RowSense::LessOrEqual => lhs <= self.rhs + tolerance,
            RowSense::GreaterOrEqual => lhs >= self.rhs - tolerance,
        }
    }
}

/// Mutable assembly stage of a [`BinaryModel`]. Validation happens at every
/// `add_*` call so errors point at the offending row.
#[derive(Clone, Debug, Default)]
pub struct BinaryModelBuilder<W> {
    objective: Vec<W>,
    variable_names: Vec<String>,
    constraints: Vec<LinearConstraint<W>>,
}

impl<W> BinaryModelBuilder<W>
where
    W: ObjectiveNumeric,
{
    /// Creates a new empty builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            objective: Vec::new(),
            variable_names: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Creates a new builder with preallocated storage.
    #[inline]
    pub fn with_capacity(num_variables: usize, num_constraints: usize) -> Self {
        Self {
            objective: Vec::with_capacity(num_variables),
            variable_names: Vec::with_capacity(num_variables),
            constraints: Vec::with_capacity(num_constraints),
        }
    }

    /// Adds a binary decision variable with the given objective coefficient
    /// and returns its id.
    pub fn add_variable<N>(&mut self, name: N, objective: W) -> Result<VarId, ModelError>
    where
        N: Into<String>,
    {
        let name = name.into();
        if !objective.is_finite() {
            return Err(ModelError::NonFiniteCoefficient {
                context: format!("objective coefficient of variable '{name}'"),
                value: objective.to_f64().unwrap_or(f64::NAN),
            });
        }

        let id = VarId::new(self.objective.len());
        self.objective.push(objective);
        self.variable_names.push(name);
        Ok(id)
    }

    /// Adds a linear constraint row and returns its id.
    pub fn add_constraint(&mut self, constraint: LinearConstraint<W>) -> Result<RowId, ModelError> {
        for term in constraint.terms() {
            if term.var.get() >= self.objective.len() {
                return Err(ModelError::VariableOutOfRange {
                    var: term.var.get(),
                    num_variables: self.objective.len(),
                });
            }
            if !term.coefficient.is_finite() {
                return Err(ModelError::NonFiniteCoefficient {
                    context: format!("row '{}'", constraint.name()),
                    value: term.coefficient.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if !constraint.rhs().is_finite() {
            return Err(ModelError::NonFiniteCoefficient {
                context: format!("right-hand side of row '{}'", constraint.name()),
                value: constraint.rhs().to_f64().unwrap_or(f64::NAN),
            });
        }

        let id = RowId::new(self.constraints.len());
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Returns the number of variables added so far.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Finishes assembly and returns the immutable model.
    #[inline]
    pub fn build(self) -> BinaryModel<W> {
        BinaryModel {
            objective: self.objective,
            variable_names: self.variable_names,
            constraints: self.constraints,
        }
    }
}

/// An immutable, validated 0/1 linear program with a maximizing objective.
#[derive(Clone, Debug)]
pub struct BinaryModel<W> {
    objective: Vec<W>,
    variable_names: Vec<String>,
    constraints: Vec<LinearConstraint<W>>,
}

impl<W> BinaryModel<W>
where
    W: ObjectiveNumeric,
{
    /// Returns the number of binary decision variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Returns the number of constraint rows.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Returns the objective coefficients, indexed by variable.
    #[inline]
    pub fn objective(&self) -> &[W] {
        &self.objective
    }

    /// Returns the objective coefficient of a variable.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    #[inline]
    pub fn objective_coefficient(&self, var: VarId) -> W {
        let index = var.get();
        debug_assert!(
            index < self.objective.len(),
            "called `BinaryModel::objective_coefficient` with variable index out of bounds: the len is {} but the index is {}",
            self.objective.len(),
            index
        );

        self.objective[index]
    }

    /// Returns the diagnostic name of a variable.
    #[inline]
    pub fn variable_name(&self, var: VarId) -> &str {
        &self.variable_names[var.get()]
    }

    /// Returns the constraint rows.
    #[inline]
    pub fn constraints(&self) -> &[LinearConstraint<W>] {
        &self.constraints
    }

    /// Evaluates the objective under the given 0/1 assignment.
    pub fn evaluate_objective(&self, values: &[bool]) -> W {
        debug_assert_eq!(
            values.len(),
            self.num_variables(),
            "called `BinaryModel::evaluate_objective` with an assignment of wrong length"
        );

        self.objective
            .iter()
            .zip(values)
            .filter(|(_, set)| **set)
            .fold(W::zero(), |acc, (coefficient, _)| acc + *coefficient)
    }

    /// Returns `true` if the given 0/1 assignment satisfies every row.
    pub fn is_feasible(&self, values: &[bool]) -> bool {
        values.len() == self.num_variables()
            && self.constraints.iter().all(|row| row.is_satisfied(values))
    }
}

impl<W> std::fmt::Display for BinaryModel<W>
where
    W: ObjectiveNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BinaryModel(variables={}, constraints={})",
            self.num_variables(),
            self.num_constraints()
        )
    }
}
