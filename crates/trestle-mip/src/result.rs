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

use crate::model::VarId;
use crate::num::ObjectiveNumeric;

/// A complete 0/1 assignment together with its objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct MipSolution<W> {
    objective_value: W,
    values: Vec<bool>,
}

impl<W> MipSolution<W>
where
    W: ObjectiveNumeric,
{
    /// Constructs a new solution.
    #[inline]
    pub fn new(objective_value: W, values: Vec<bool>) -> Self {
        Self {
            objective_value,
            values,
        }
    }

    /// Returns the objective value of this solution.
    #[inline]
    pub fn objective_value(&self) -> W {
        self.objective_value
    }

    /// Returns the value of a specific variable.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of bounds.
    #[inline]
    pub fn value(&self, var: VarId) -> bool {
        let index = var.get();
        debug_assert!(
            index < self.values.len(),
            "called `MipSolution::value` with variable index out of bounds: the len is {} but the index is {}",
            self.values.len(),
            index
        );

        self.values[index]
    }

    /// Returns the full 0/1 assignment, indexed by variable.
    #[inline]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Returns the number of variables in this solution.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }
}

/// The result of a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<W> {
    /// The problem has no feasible assignment.
    Infeasible,
    /// A solution was found and proven optimal.
    Optimal(MipSolution<W>),
    /// A feasible solution was found, but optimality was not proven.
    Feasible(MipSolution<W>),
    /// The solver terminated without finding a solution and without
    /// proving infeasibility.
    Unknown,
}

impl<W> std::fmt::Display for SolverResult<W>
where
    W: ObjectiveNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(solution) => {
                write!(f, "Optimal(objective={})", solution.objective_value())
            }
            SolverResult::Feasible(solution) => {
                write!(f, "Feasible(objective={})", solution.objective_value())
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the solver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver found and proved optimality of a solution.
    OptimalityProven,
    /// The solver proved that the problem is infeasible.
    InfeasibilityProven,
    /// The solver aborted due to a search limit (time, interrupt, ...).
    /// The string carries the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Statistics collected during a solve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolveStatistics {
    /// Number of search nodes explored.
    pub nodes_explored: u64,
    /// Number of improving solutions found.
    pub solutions_found: u64,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// The full outcome of a solve: result, termination reason, and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<W> {
    result: SolverResult<W>,
    reason: TerminationReason,
    statistics: SolveStatistics,
}

impl<W> SolveOutcome<W>
where
    W: ObjectiveNumeric,
{
    /// An outcome for a proven-optimal solution.
    #[inline]
    pub fn optimal(solution: MipSolution<W>, statistics: SolveStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(solution),
            reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    /// An outcome for a proven-infeasible model.
    #[inline]
    pub fn infeasible(statistics: SolveStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// An outcome for an aborted solve. The best incumbent, if any, is
    /// reported as `Feasible`; otherwise the result is `Unknown`.
    #[inline]
    pub fn aborted<R>(
        incumbent: Option<MipSolution<W>>,
        reason: R,
        statistics: SolveStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match incumbent {
            Some(solution) => SolverResult::Feasible(solution),
            None => SolverResult::Unknown,
        };
        Self {
            result,
            reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<W> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the solve statistics.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Returns `true` if the result is proven optimal.
    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    /// Returns `true` if the solve was aborted.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }

    /// Returns the contained solution, if any.
    #[inline]
    pub fn solution(&self) -> Option<&MipSolution<W>> {
        match &self.result {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the contained solution, if any.
    #[inline]
    pub fn into_solution(self) -> Option<MipSolution<W>> {
        match self.result {
            SolverResult::Optimal(solution) | SolverResult::Feasible(solution) => Some(solution),
            _ => None,
        }
    }
}
