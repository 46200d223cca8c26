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

//! # Branch-and-Bound Solver
//!
//! A stateful search engine that explores 0/1 assignments of a
//! `BinaryModel` while pruning branches that cannot beat the incumbent.
//! Variables are decided in model order with the objective-preferred value
//! first; every touched row is re-checked against its remaining
//! contribution interval, so infeasible partial assignments are cut as
//! early as possible. The optimistic bound is the current objective value
//! plus the positive objective mass of all undecided variables.
//!
//! The incumbent is replaced only on strict improvement. A feasible warm
//! start therefore survives the search unchanged whenever it is already
//! optimal, which keeps repeated solves over near-identical models
//! deterministic. Monitors observe every node and can terminate the search
//! cooperatively; an aborted run reports its best incumbent as `Feasible`
//! rather than pretending optimality.

use fixedbitset::FixedBitSet;
use trestle_mip::{
    model::{BinaryModel, RowSense},
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::{solution_tolerance, ObjectiveNumeric},
    result::{MipSolution, SolveOutcome, SolveStatistics},
    solver::MipSolver,
};

/// An exact branch-and-bound solver for 0/1 linear programs.
#[derive(Debug, Clone, Default)]
pub struct BnbSolver<W> {
    _phantom: std::marker::PhantomData<W>,
}

impl<W> BnbSolver<W>
where
    W: ObjectiveNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<W> MipSolver<W> for BnbSolver<W>
where
    W: ObjectiveNumeric,
{
    fn name(&self) -> &str {
        "BnbSolver"
    }

    fn solve<M>(
        &mut self,
        model: &BinaryModel<W>,
        warm_start: Option<&[bool]>,
        mut monitor: M,
    ) -> SolveOutcome<W>
    where
        M: SearchMonitor<W>,
    {
        let start_time = std::time::Instant::now();
        monitor.on_enter_search(model);

        let mut session = SearchSession::new(model, &mut monitor);

        // An infeasible warm start is silently ignored.
        if let Some(values) = warm_start {
            if values.len() == model.num_variables() && model.is_feasible(values) {
                session.incumbent = Some(MipSolution::new(
                    model.evaluate_objective(values),
                    values.to_vec(),
                ));
            }
        }

        let outcome = if session.rows_initially_satisfiable() {
            session.branch(0);
            session.finish(start_time)
        } else {
            let statistics = session.statistics(start_time);
            SolveOutcome::infeasible(statistics)
        };

        monitor.on_exit_search();
        outcome
    }
}

/// Per-row bookkeeping: the activity of the decided variables plus the
/// interval of contributions still reachable from the undecided ones.
struct RowState<W> {
    sense: RowSense,
    rhs: W,
    activity: W,
    min_remaining: W,
    max_remaining: W,
}

impl<W> RowState<W>
where
    W: ObjectiveNumeric,
{
    /// Returns `true` if some completion of the undecided variables can
    /// still satisfy this row.
    #[inline]
    fn is_satisfiable(&self, tolerance: W) -> bool {
        match self.sense {
            RowSense::Equal => {
                self.activity + self.min_remaining <= self.rhs + tolerance
                    && self.activity + self.max_remaining >= self.rhs - tolerance
            }
            RowSense::LessOrEqual => self.activity + self.min_remaining <= self.rhs + tolerance,
            RowSense::GreaterOrEqual => self.activity + self.max_remaining >= self.rhs - tolerance,
        }
    }
}

/// Per-run search state. One session per `solve` call; nothing is shared
/// across calls.
struct SearchSession<'a, W, M> {
    model: &'a BinaryModel<W>,
    monitor: &'a mut M,
    tolerance: W,
    rows: Vec<RowState<W>>,
    /// For every variable: the rows it appears in, with its coefficient.
    var_rows: Vec<Vec<(usize, W)>>,
    values: Vec<bool>,
    decided: FixedBitSet,
    objective_value: W,
    /// Sum of the positive objective coefficients of undecided variables.
    positive_remaining: W,
    incumbent: Option<MipSolution<W>>,
    abort_reason: Option<String>,
    nodes_explored: u64,
    solutions_found: u64,
}

impl<'a, W, M> SearchSession<'a, W, M>
where
    W: ObjectiveNumeric,
    M: SearchMonitor<W>,
{
    fn new(model: &'a BinaryModel<W>, monitor: &'a mut M) -> Self {
        let num_variables = model.num_variables();

        let mut var_rows: Vec<Vec<(usize, W)>> = vec![Vec::new(); num_variables];
        let mut rows = Vec::with_capacity(model.num_constraints());
        for (row_index, constraint) in model.constraints().iter().enumerate() {
            let mut min_remaining = W::zero();
            let mut max_remaining = W::zero();
            for term in constraint.terms() {
                if term.coefficient < W::zero() {
                    min_remaining = min_remaining + term.coefficient;
                } else {
                    max_remaining = max_remaining + term.coefficient;
                }
                var_rows[term.var.get()].push((row_index, term.coefficient));
            }
            rows.push(RowState {
                sense: constraint.sense(),
                rhs: constraint.rhs(),
                activity: W::zero(),
                min_remaining,
                max_remaining,
            });
        }

        let positive_remaining = model
            .objective()
            .iter()
            .filter(|coefficient| **coefficient > W::zero())
            .fold(W::zero(), |acc, coefficient| acc + *coefficient);

        Self {
            model,
            monitor,
            tolerance: solution_tolerance::<W>(),
            rows,
            var_rows,
            values: vec![false; num_variables],
            decided: FixedBitSet::with_capacity(num_variables),
            objective_value: W::zero(),
            positive_remaining,
            incumbent: None,
            abort_reason: None,
            nodes_explored: 0,
            solutions_found: 0,
        }
    }

    /// Checks every row against its initial contribution interval. Catches
    /// rows that are unsatisfiable before any branching (including rows
    /// with no terms at all).
    fn rows_initially_satisfiable(&self) -> bool {
        self.rows.iter().all(|row| row.is_satisfiable(self.tolerance))
    }

    /// Depth-first exploration from the given variable. Returns `true` if
    /// the search was aborted by the monitor.
    fn branch(&mut self, var: usize) -> bool {
        self.nodes_explored += 1;
        self.monitor.on_step();
        if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
            self.abort_reason = Some(reason);
            return true;
        }

        if var == self.model.num_variables() {
            self.record_leaf();
            return false;
        }

        // Optimistic bound: nothing below this node can strictly improve
        // on the incumbent.
        if let Some(incumbent) = &self.incumbent {
            let bound = self.objective_value + self.positive_remaining;
            if bound <= incumbent.objective_value() + self.tolerance {
                return false;
            }
        }

        let coefficient = self.model.objective()[var];
        let preferred = coefficient > W::zero();
        for value in [preferred, !preferred] {
            self.fix(var, value);
            let feasible = self.touched_rows_satisfiable(var);
            let aborted = if feasible { self.branch(var + 1) } else { false };
            self.unfix(var, value);
            if aborted {
                return true;
            }
        }
        false
    }

    /// Records a complete assignment. Row feasibility is already
    /// guaranteed: every row was exact-checked when its last variable was
    /// fixed.
    fn record_leaf(&mut self) {
        let improved = match &self.incumbent {
            None => true,
            Some(incumbent) => {
                self.objective_value > incumbent.objective_value() + self.tolerance
            }
        };
        if improved {
            let solution = MipSolution::new(self.objective_value, self.values.clone());
            self.monitor.on_solution_found(&solution);
            self.solutions_found += 1;
            self.incumbent = Some(solution);
        }
    }

    fn fix(&mut self, var: usize, value: bool) {
        debug_assert!(
            !self.decided.contains(var),
            "called `SearchSession::fix` on an already decided variable {var}"
        );
        self.decided.insert(var);
        self.values[var] = value;

        let coefficient = self.model.objective()[var];
        if value {
            self.objective_value = self.objective_value + coefficient;
        }
        if coefficient > W::zero() {
            self.positive_remaining = self.positive_remaining - coefficient;
        }

        for (row_index, row_coefficient) in &self.var_rows[var] {
            let row = &mut self.rows[*row_index];
            if value {
                row.activity = row.activity + *row_coefficient;
            }
            if *row_coefficient < W::zero() {
                row.min_remaining = row.min_remaining - *row_coefficient;
            } else {
                row.max_remaining = row.max_remaining - *row_coefficient;
            }
        }
    }

    fn unfix(&mut self, var: usize, value: bool) {
        debug_assert!(
            self.decided.contains(var),
            "called `SearchSession::unfix` on an undecided variable {var}"
        );
        self.decided.remove(var);

        let coefficient = self.model.objective()[var];
        if value {
            self.objective_value = self.objective_value - coefficient;
        }
        if coefficient > W::zero() {
            self.positive_remaining = self.positive_remaining + coefficient;
        }

        for (row_index, row_coefficient) in &self.var_rows[var] {
            let row = &mut self.rows[*row_index];
            if value {
                row.activity = row.activity - *row_coefficient;
            }
            if *row_coefficient < W::zero() {
                row.min_remaining = row.min_remaining + *row_coefficient;
            } else {
                row.max_remaining = row.max_remaining + *row_coefficient;
            }
        }
    }

    /// Re-checks only the rows the just-fixed variable participates in.
    fn touched_rows_satisfiable(&self, var: usize) -> bool {
        self.var_rows[var]
            .iter()
            .all(|(row_index, _)| self.rows[*row_index].is_satisfiable(self.tolerance))
    }

    fn statistics(&self, start_time: std::time::Instant) -> SolveStatistics {
        SolveStatistics {
            nodes_explored: self.nodes_explored,
            solutions_found: self.solutions_found,
            solve_duration: start_time.elapsed(),
        }
    }

    fn finish(self, start_time: std::time::Instant) -> SolveOutcome<W> {
        let statistics = self.statistics(start_time);
        match (self.abort_reason, self.incumbent) {
            (Some(reason), incumbent) => SolveOutcome::aborted(incumbent, reason, statistics),
            (None, Some(incumbent)) => SolveOutcome::optimal(incumbent, statistics),
            (None, None) => SolveOutcome::infeasible(statistics),
        }
    }
}
